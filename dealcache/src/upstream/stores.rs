// internal crates
use crate::http::{self, errors::HTTPErr, request, ClientI};
use cheapshark_api::models::Store;

// external crates
use tokio::time::Duration;

pub async fn fetch_stores(client: &impl ClientI, timeout: Duration) -> Result<Vec<Store>, HTTPErr> {
    let url = format!("{}/stores", client.base_url());
    let request = request::Params::get(&url, timeout);
    http::client::fetch(client, request).await
}
