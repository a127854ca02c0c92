// standard library
use std::future::Future;

// internal crates
use crate::http::{
    errors::{BuildClientErr, HTTPErr, TimeoutErr},
    request::Params,
    response,
};
use crate::trace;
use crate::version;

// external crates
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use tracing::debug;

/// Everything that talks to the upstream API goes through this trait so tests
/// can substitute a scripted client.
pub trait ClientI: Send + Sync {
    fn base_url(&self) -> &str;

    /// Sends the request and returns the body of a 2xx response.
    fn execute(&self, params: Params<'_>) -> impl Future<Output = Result<String, HTTPErr>> + Send;
}

#[derive(Debug)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, HTTPErr> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .user_agent(format!("dealcache/{}", version::VERSION))
            .default_headers(headers)
            .build()
            .map_err(|source| {
                HTTPErr::BuildClientErr(BuildClientErr {
                    source,
                    trace: trace!(),
                })
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl ClientI for Client {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, params: Params<'_>) -> Result<String, HTTPErr> {
        let endpoint = params.endpoint();
        debug!("sending {}", endpoint);

        let mut request = self.client.get(params.url).timeout(params.timeout);
        if !params.query.is_empty() {
            request = request.query(params.query.pairs());
        }

        // reqwest's timeout covers the body too, this one also bounds connection setup
        let response = match timeout(params.timeout, request.send()).await {
            Ok(sent) => sent.map_err(|e| HTTPErr::from_reqwest(e, &endpoint, trace!()))?,
            Err(_) => {
                return Err(HTTPErr::TimeoutErr(TimeoutErr {
                    endpoint,
                    trace: trace!(),
                }))
            }
        };
        response::read_text(response, &endpoint).await
    }
}

/// Executes `params` and decodes the JSON body.
pub async fn fetch<T>(client: &impl ClientI, params: Params<'_>) -> Result<T, HTTPErr>
where
    T: DeserializeOwned,
{
    let endpoint = params.endpoint();
    let text = client.execute(params).await?;
    response::decode(&text, &endpoint)
}
