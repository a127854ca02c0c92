// internal crates
use cheapshark_api::models::Store;

// external crates
use serde::{Deserialize, Serialize};

/// Which of the known stores a deals refresh pulls from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreSelection {
    All,
    /// The first `n` stores in upstream order.
    First(usize),
    /// Stores whose id or name is listed.
    AllowList(Vec<String>),
}

impl Default for StoreSelection {
    fn default() -> Self {
        StoreSelection::First(1)
    }
}

impl StoreSelection {
    pub fn select<'a>(&self, stores: &'a [Store]) -> Vec<&'a Store> {
        match self {
            StoreSelection::All => stores.iter().collect(),
            StoreSelection::First(n) => stores.iter().take(*n).collect(),
            StoreSelection::AllowList(allowed) => stores
                .iter()
                .filter(|store| {
                    allowed
                        .iter()
                        .any(|entry| *entry == store.id || *entry == store.name)
                })
                .collect(),
        }
    }
}
