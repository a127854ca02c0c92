// standard library
use std::sync::Arc;

// internal crates
use crate::cache::Reader;
use crate::models::{sort_by_price, DealsByStore};
use crate::services::errors::{CacheField, CacheUnpopulatedErr, ServiceErr, StoreNotFoundErr};
use crate::trace;
use cheapshark_api::models::Deal;

#[derive(Debug, Clone, PartialEq)]
pub enum DealsListing {
    ByStore(Arc<DealsByStore>),
    Store(Vec<Deal>),
}

fn cached_deals(reader: &Reader) -> Result<Arc<DealsByStore>, ServiceErr> {
    reader.deals().map(|cached| cached.data).ok_or_else(|| {
        ServiceErr::CacheUnpopulatedErr(CacheUnpopulatedErr {
            field: CacheField::Deals,
            trace: trace!(),
        })
    })
}

/// Every cached store's deals, or one store's deals when `store_name` is given.
pub fn list_deals(reader: &Reader, store_name: Option<&str>) -> Result<DealsListing, ServiceErr> {
    let deals = cached_deals(reader)?;
    let Some(store_name) = store_name else {
        return Ok(DealsListing::ByStore(deals));
    };
    match deals.get(store_name) {
        Some(store_deals) => Ok(DealsListing::Store(store_deals.clone())),
        None => Err(ServiceErr::StoreNotFoundErr(StoreNotFoundErr {
            store_name: store_name.to_string(),
            trace: trace!(),
        })),
    }
}

/// The `n` cheapest deals across all cached stores, cheapest first.
pub fn top_deals(reader: &Reader, n: usize) -> Result<Vec<Deal>, ServiceErr> {
    let deals = cached_deals(reader)?;
    let flattened: Vec<Deal> = deals.values().flatten().cloned().collect();
    let mut sorted = sort_by_price(flattened);
    sorted.truncate(n);
    Ok(sorted)
}
