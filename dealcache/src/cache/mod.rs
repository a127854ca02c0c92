//! The process-wide copy of the latest known-good stores and deals.
//!
//! Each field lives in its own `watch` channel so a publish is one atomic swap and
//! readers always see either the previous value or the new one. [`new`] hands out a
//! single [`Writer`] and any number of [`Reader`]s.

// standard library
use std::fmt;
use std::sync::Arc;

// internal crates
use crate::models::DealsByStore;
use cheapshark_api::models::Store;

// external crates
use chrono::{DateTime, Utc};
use tokio::sync::watch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Disk,
    Upstream,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Disk => write!(f, "disk"),
            Origin::Upstream => write!(f, "upstream"),
        }
    }
}

/// An immutable cached value plus when and where it was loaded from.
#[derive(Debug)]
pub struct Cached<T> {
    pub data: Arc<T>,
    pub loaded_at: DateTime<Utc>,
    pub origin: Origin,
}

impl<T> Clone for Cached<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loaded_at: self.loaded_at,
            origin: self.origin,
        }
    }
}

impl<T> Cached<T> {
    pub fn new(data: T, origin: Origin) -> Self {
        Self {
            data: Arc::new(data),
            loaded_at: Utc::now(),
            origin,
        }
    }
}

type Slot<T> = Option<Cached<T>>;

pub fn new() -> (Writer, Reader) {
    let (stores_tx, stores_rx) = watch::channel::<Slot<Vec<Store>>>(None);
    let (deals_tx, deals_rx) = watch::channel::<Slot<DealsByStore>>(None);
    (
        Writer {
            stores: stores_tx,
            deals: deals_tx,
        },
        Reader {
            stores: stores_rx,
            deals: deals_rx,
        },
    )
}

// ================================ WRITER ========================================= //

/// The only handle able to publish. Not `Clone`.
#[derive(Debug)]
pub struct Writer {
    stores: watch::Sender<Slot<Vec<Store>>>,
    deals: watch::Sender<Slot<DealsByStore>>,
}

impl Writer {
    pub fn set_stores(&self, stores: Vec<Store>, origin: Origin) -> Cached<Vec<Store>> {
        let cached = Cached::new(stores, origin);
        self.stores.send_replace(Some(cached.clone()));
        cached
    }

    pub fn set_deals(&self, deals: DealsByStore, origin: Origin) -> Cached<DealsByStore> {
        let cached = Cached::new(deals, origin);
        self.deals.send_replace(Some(cached.clone()));
        cached
    }

    pub fn stores(&self) -> Slot<Vec<Store>> {
        self.stores.borrow().clone()
    }

    pub fn deals(&self) -> Slot<DealsByStore> {
        self.deals.borrow().clone()
    }

    pub fn reader(&self) -> Reader {
        Reader {
            stores: self.stores.subscribe(),
            deals: self.deals.subscribe(),
        }
    }
}

// ================================ READER ========================================= //

#[derive(Clone, Debug)]
pub struct Reader {
    stores: watch::Receiver<Slot<Vec<Store>>>,
    deals: watch::Receiver<Slot<DealsByStore>>,
}

impl Reader {
    pub fn stores(&self) -> Slot<Vec<Store>> {
        self.stores.borrow().clone()
    }

    pub fn deals(&self) -> Slot<DealsByStore> {
        self.deals.borrow().clone()
    }
}
