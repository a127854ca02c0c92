// standard library
use std::sync::Arc;

// internal crates
use crate::cache::Reader;
use crate::services::errors::{CacheField, CacheUnpopulatedErr, ServiceErr};
use crate::trace;
use cheapshark_api::models::Store;

pub fn list_stores(reader: &Reader) -> Result<Arc<Vec<Store>>, ServiceErr> {
    reader.stores().map(|cached| cached.data).ok_or_else(|| {
        ServiceErr::CacheUnpopulatedErr(CacheUnpopulatedErr {
            field: CacheField::Stores,
            trace: trace!(),
        })
    })
}
