use cheapshark_api::models::Store;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoresResponse {
    #[serde(rename = "source")]
    pub source: super::Source,
    #[serde(rename = "stores")]
    pub stores: Vec<Store>,
}

impl StoresResponse {
    pub fn new(stores: Vec<Store>) -> StoresResponse {
        StoresResponse {
            source: super::Source::Disk,
            stores,
        }
    }
}
