use std::collections::BTreeMap;

use cheapshark_api::models::Deal;
use serde::{Deserialize, Serialize};

/// DealsBody : Either every cached store's deals keyed by store name, or a flat
/// list (a single store's deals, or the cheapest deals across stores).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DealsBody {
    ByStore(BTreeMap<String, Vec<Deal>>),
    List(Vec<Deal>),
}

impl Default for DealsBody {
    fn default() -> DealsBody {
        Self::List(Vec::new())
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct DealsResponse {
    #[serde(rename = "source")]
    pub source: super::Source,
    #[serde(rename = "deals")]
    pub deals: DealsBody,
}

impl DealsResponse {
    pub fn new(deals: DealsBody) -> DealsResponse {
        DealsResponse {
            source: super::Source::Disk,
            deals,
        }
    }
}
