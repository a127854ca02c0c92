use serde::{Deserialize, Serialize};

/// Store : A retailer tracked by the upstream API. Fields the service does not
/// interpret are kept in `other` so a store round-trips unchanged.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "storeID")]
    pub id: String,
    #[serde(rename = "storeName")]
    pub name: String,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Store {
    pub fn new(id: String, name: String) -> Store {
        Store {
            id,
            name,
            other: serde_json::Map::new(),
        }
    }
}
