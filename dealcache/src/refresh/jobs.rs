// standard library
use std::sync::Arc;

// internal crates
use crate::http::ClientI;
use crate::refresh::refresher::{Refreshed, Refresher};
use crate::scheduler::Job;

// external crates
use async_trait::async_trait;
use tracing::{error, info};

pub struct StoresJob<C: ClientI> {
    refresher: Arc<Refresher<C>>,
}

impl<C: ClientI> StoresJob<C> {
    pub fn new(refresher: Arc<Refresher<C>>) -> Self {
        Self { refresher }
    }
}

#[async_trait]
impl<C: ClientI + 'static> Job for StoresJob<C> {
    fn name(&self) -> &str {
        "refresh_stores"
    }

    async fn run(&self) {
        match self.refresher.refresh_stores().await {
            Ok(Refreshed::Published(stores)) => {
                info!("published {} stores", stores.len());
            }
            Ok(Refreshed::Skipped) => {}
            Err(e) => error!("stores refresh failed: {}", e),
        }
    }
}

pub struct DealsJob<C: ClientI> {
    refresher: Arc<Refresher<C>>,
}

impl<C: ClientI> DealsJob<C> {
    pub fn new(refresher: Arc<Refresher<C>>) -> Self {
        Self { refresher }
    }
}

#[async_trait]
impl<C: ClientI + 'static> Job for DealsJob<C> {
    fn name(&self) -> &str {
        "refresh_deals"
    }

    async fn run(&self) {
        match self.refresher.refresh_deals().await {
            Ok(Refreshed::Published(deals)) => {
                let total: usize = deals.values().map(Vec::len).sum();
                info!("published {} deals across {} stores", total, deals.len());
            }
            Ok(Refreshed::Skipped) => {}
            Err(e) => error!("deals refresh failed: {}", e),
        }
    }
}
