// internal crates
use crate::http::{
    errors::{HTTPErr, InvalidJSONErr, StatusErr},
    request::Endpoint,
};
use crate::trace;

// external crates
use serde::de::DeserializeOwned;

const BODY_EXCERPT_CHARS: usize = 256;

/// Reads the whole body of a successful response. Any other status becomes a
/// `StatusErr` carrying the start of the body.
pub async fn read_text(
    response: reqwest::Response,
    endpoint: &Endpoint,
) -> Result<String, HTTPErr> {
    let status = response.status();
    if status.is_success() {
        return response
            .text()
            .await
            .map_err(|e| HTTPErr::from_reqwest(e, endpoint, trace!()));
    }

    let body = match response.text().await {
        Ok(text) if !text.is_empty() => Some(text.chars().take(BODY_EXCERPT_CHARS).collect()),
        _ => None,
    };
    Err(HTTPErr::StatusErr(StatusErr {
        endpoint: endpoint.clone(),
        status,
        body,
        trace: trace!(),
    }))
}

pub fn decode<T: DeserializeOwned>(text: &str, endpoint: &Endpoint) -> Result<T, HTTPErr> {
    serde_json::from_str(text).map_err(|source| {
        HTTPErr::InvalidJSONErr(InvalidJSONErr {
            endpoint: endpoint.clone(),
            source,
            trace: trace!(),
        })
    })
}
