// standard library
use std::sync::Arc;

// internal crates
use crate::cache::{self, Origin};
use crate::http::ClientI;
use crate::models::DealsByStore;
use crate::refresh::{RefreshOptions, Refresher};
use crate::storage::{SnapshotKey, SnapshotStore, StorageLayout};
use cheapshark_api::models::Store;

// external crates
use tracing::{error, info};

pub struct AppState<C: ClientI> {
    pub refresher: Arc<Refresher<C>>,
    pub cache: cache::Reader,
}

impl<C: ClientI> AppState<C> {
    /// Builds the cache, seeds it from the last persisted snapshots and hands its
    /// writer to a new refresher.
    pub async fn init(client: C, layout: &StorageLayout, options: RefreshOptions) -> Self {
        let (writer, reader) = cache::new();
        let snapshots = SnapshotStore::new(layout.clone());

        match snapshots.load::<Vec<Store>>(SnapshotKey::Stores).await {
            Ok(Some(stores)) => {
                info!("loaded {} stores from disk", stores.len());
                writer.set_stores(stores, Origin::Disk);
            }
            Ok(None) => info!("no stores snapshot on disk"),
            Err(e) => error!("unable to read stores snapshot: {}", e),
        }
        match snapshots.load::<DealsByStore>(SnapshotKey::Deals).await {
            Ok(Some(deals)) => {
                info!("loaded deals for {} stores from disk", deals.len());
                writer.set_deals(deals, Origin::Disk);
            }
            Ok(None) => info!("no deals snapshot on disk"),
            Err(e) => error!("unable to read deals snapshot: {}", e),
        }

        let refresher = Refresher::new(client, writer, snapshots, options);
        AppState {
            refresher: Arc::new(refresher),
            cache: reader,
        }
    }
}
