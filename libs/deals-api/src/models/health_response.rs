use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(rename = "status")]
    pub status: String,
    /// RFC 3339 timestamp of when the cached stores were loaded
    #[serde(rename = "stores_loaded_at", skip_serializing_if = "Option::is_none")]
    pub stores_loaded_at: Option<String>,
    /// RFC 3339 timestamp of when the cached deals were loaded
    #[serde(rename = "deals_loaded_at", skip_serializing_if = "Option::is_none")]
    pub deals_loaded_at: Option<String>,
}
