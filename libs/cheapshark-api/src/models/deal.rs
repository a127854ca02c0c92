use serde::{Deserialize, Serialize};

/// Deal : An on-sale listing. Every field is optional on the wire; fields the
/// service does not interpret are kept in `other`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(rename = "title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "storeID", default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(rename = "price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<serde_json::Value>,
    #[serde(rename = "salePrice", default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<serde_json::Value>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Deal {
    pub fn new() -> Deal {
        Deal::default()
    }

    pub fn with_price(mut self, price: impl Into<serde_json::Value>) -> Deal {
        self.price = Some(price.into());
        self
    }

    pub fn with_title(mut self, title: &str) -> Deal {
        self.title = Some(title.to_string());
        self
    }
}
