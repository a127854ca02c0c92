// internal crates
use crate::http::{
    self,
    errors::HTTPErr,
    query::{Page, QueryParams},
    request, ClientI,
};
use crate::upstream::{Pacer, UpstreamOptions};
use cheapshark_api::models::Deal;

// external crates
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

/// The deals collected for one store. Pagination stops at the first empty page or
/// at the first failed page, in which case `stopped_by` holds that failure and
/// `deals` holds whatever was collected before it.
#[derive(Debug, Default)]
pub struct DealPages {
    pub deals: Vec<Deal>,
    pub pages: usize,
    pub stopped_by: Option<HTTPErr>,
}

pub async fn fetch_deals(
    client: &impl ClientI,
    store_id: &str,
    options: &UpstreamOptions,
) -> DealPages {
    let url = format!("{}/deals", client.base_url());
    let mut pacer = Pacer::new(options.page_delay);
    let mut page = Page {
        number: 0,
        size: options.page_size,
    };
    let mut result = DealPages::default();

    loop {
        pacer.ready().await;

        let query = QueryParams::new()
            .add("onSale", "1")
            .add("storeID", store_id)
            .paginate(&page);
        let request = request::Params::get(&url, options.timeout).with_query(query);
        let fetched = http::client::fetch::<Vec<Deal>>(client, request).await;
        pacer.done();
        let deals = match fetched {
            Ok(deals) => deals,
            Err(e) => {
                warn!(
                    "stopping pagination for store '{}' at page {}: {}",
                    store_id, page.number, e
                );
                result.stopped_by = Some(e);
                return result;
            }
        };
        if deals.is_empty() {
            debug!(
                "store '{}' exhausted after {} page(s) ({} deals)",
                store_id,
                result.pages,
                result.deals.len()
            );
            return result;
        }

        result.pages += 1;
        result.deals.extend(deals);
        page = page.next();
    }
}
