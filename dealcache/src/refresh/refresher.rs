// standard library
use std::sync::Arc;

// internal crates
use crate::cache::{self, Origin};
use crate::http::ClientI;
use crate::models::DealsByStore;
use crate::refresh::{
    errors::{
        AllStoresFailedErr, EmptyStoresErr, NoKnownStoresErr, NoStoresSelectedErr, RefreshErr,
    },
    selection::StoreSelection,
};
use crate::storage::{SnapshotKey, SnapshotStore};
use crate::trace;
use crate::upstream::{self, DealPages, Pacer, UpstreamOptions};
use cheapshark_api::models::Store;

// external crates
use tokio::sync::Mutex;
use tokio::time::Duration;
#[allow(unused_imports)]
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshOptions {
    pub upstream: UpstreamOptions,
    pub store_cooldown: Duration,
    pub store_selection: StoreSelection,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            upstream: UpstreamOptions::default(),
            store_cooldown: Duration::from_secs(30),
            store_selection: StoreSelection::default(),
        }
    }
}

#[derive(Debug)]
pub enum Refreshed<T> {
    Published(Arc<T>),
    /// Another refresh of the same kind was already running.
    Skipped,
}

/// Repopulates the cache from the upstream and persists what it publishes. Owns the
/// cache's only writer.
pub struct Refresher<C: ClientI> {
    client: C,
    writer: cache::Writer,
    snapshots: SnapshotStore,
    options: RefreshOptions,

    // held for the duration of a run; a second run of the same kind skips
    stores_lock: Mutex<()>,
    deals_lock: Mutex<()>,
}

impl<C: ClientI> Refresher<C> {
    pub fn new(
        client: C,
        writer: cache::Writer,
        snapshots: SnapshotStore,
        options: RefreshOptions,
    ) -> Self {
        Self {
            client,
            writer,
            snapshots,
            options,
            stores_lock: Mutex::new(()),
            deals_lock: Mutex::new(()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn reader(&self) -> cache::Reader {
        self.writer.reader()
    }

    pub async fn refresh_stores(&self) -> Result<Refreshed<Vec<Store>>, RefreshErr> {
        let Ok(_guard) = self.stores_lock.try_lock() else {
            info!("stores refresh already in progress, skipping");
            return Ok(Refreshed::Skipped);
        };
        let span = info_span!("refresh_stores", run_id = %Uuid::new_v4());
        self.refresh_stores_impl().instrument(span).await
    }

    async fn refresh_stores_impl(&self) -> Result<Refreshed<Vec<Store>>, RefreshErr> {
        let stores = upstream::fetch_stores(&self.client, self.options.upstream.timeout).await?;
        if stores.is_empty() {
            return Err(RefreshErr::EmptyStoresErr(EmptyStoresErr { trace: trace!() }));
        }
        info!("fetched {} stores", stores.len());

        if let Err(e) = self.snapshots.save(SnapshotKey::Stores, &stores).await {
            error!("failed to persist stores snapshot: {}", e);
        }
        let cached = self.writer.set_stores(stores, Origin::Upstream);
        Ok(Refreshed::Published(cached.data))
    }

    pub async fn refresh_deals(&self) -> Result<Refreshed<DealsByStore>, RefreshErr> {
        let Ok(_guard) = self.deals_lock.try_lock() else {
            info!("deals refresh already in progress, skipping");
            return Ok(Refreshed::Skipped);
        };
        let span = info_span!("refresh_deals", run_id = %Uuid::new_v4());
        self.refresh_deals_impl().instrument(span).await
    }

    async fn refresh_deals_impl(&self) -> Result<Refreshed<DealsByStore>, RefreshErr> {
        let stores = self.known_stores().await?;
        let selected = self.options.store_selection.select(&stores);
        if selected.is_empty() {
            return Err(RefreshErr::NoStoresSelectedErr(NoStoresSelectedErr {
                known: stores.len(),
                trace: trace!(),
            }));
        }
        info!(
            "refreshing deals for {} of {} known stores",
            selected.len(),
            stores.len()
        );

        let previous = self.writer.deals();
        let mut cooldown = Pacer::new(self.options.store_cooldown);
        let mut deals = DealsByStore::new();
        let mut failed = 0;

        for store in selected.iter() {
            cooldown.ready().await;

            let DealPages {
                deals: fetched,
                pages,
                stopped_by,
            } = upstream::fetch_deals(&self.client, &store.id, &self.options.upstream).await;
            cooldown.done();

            match stopped_by {
                None => {
                    info!(
                        "fetched {} deals for store '{}' over {} page(s)",
                        fetched.len(),
                        store.name,
                        pages
                    );
                    deals.insert(store.name.clone(), fetched);
                }
                Some(e) if !fetched.is_empty() => {
                    warn!(
                        "keeping {} deals for store '{}' fetched before pagination failed: {}",
                        fetched.len(),
                        store.name,
                        e
                    );
                    deals.insert(store.name.clone(), fetched);
                }
                Some(e) => {
                    failed += 1;
                    let prior = previous
                        .as_ref()
                        .and_then(|cached| cached.data.get(&store.name))
                        .cloned();
                    match prior {
                        Some(prior) => {
                            warn!(
                                "no deals fetched for store '{}', keeping {} cached deals: {}",
                                store.name,
                                prior.len(),
                                e
                            );
                            deals.insert(store.name.clone(), prior);
                        }
                        None => {
                            error!("no deals fetched for store '{}': {}", store.name, e);
                        }
                    }
                }
            }
        }

        if deals.is_empty() && failed == selected.len() {
            return Err(RefreshErr::AllStoresFailedErr(AllStoresFailedErr {
                attempted: failed,
                trace: trace!(),
            }));
        }

        if let Err(e) = self.snapshots.save(SnapshotKey::Deals, &deals).await {
            error!("failed to persist deals snapshot: {}", e);
        }
        let cached = self.writer.set_deals(deals, Origin::Upstream);
        Ok(Refreshed::Published(cached.data))
    }

    async fn known_stores(&self) -> Result<Arc<Vec<Store>>, RefreshErr> {
        match self.refresh_stores().await {
            Ok(Refreshed::Published(stores)) => return Ok(stores),
            Ok(Refreshed::Skipped) => {
                debug!("stores refresh already running, waiting for it to finish");
                drop(self.stores_lock.lock().await);
            }
            Err(e) => {
                warn!("stores refresh failed, using cached stores: {}", e);
            }
        }
        match self.writer.stores() {
            Some(cached) if !cached.data.is_empty() => Ok(cached.data),
            _ => Err(RefreshErr::NoKnownStoresErr(NoKnownStoresErr {
                trace: trace!(),
            })),
        }
    }
}
