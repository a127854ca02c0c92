// standard library
use std::fmt;

// internal crates
use crate::filesys::{errors::FileSysErr, file::File, path::PathExt};
use crate::storage::{
    errors::{SerializeSnapshotErr, StorageErr},
    layout::StorageLayout,
};
use crate::trace;

// external crates
use serde::{de::DeserializeOwned, Serialize};
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Stores,
    Deals,
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotKey::Stores => write!(f, "stores"),
            SnapshotKey::Deals => write!(f, "deals"),
        }
    }
}

/// File-backed snapshot persistence used to recover the cache after a restart.
/// Each key maps to one JSON file that is fully replaced on every save.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    layout: StorageLayout,
}

impl SnapshotStore {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn file(&self, key: SnapshotKey) -> File {
        match key {
            SnapshotKey::Stores => self.layout.stores_file(),
            SnapshotKey::Deals => self.layout.deals_file(),
        }
    }

    pub async fn save<T: Serialize>(&self, key: SnapshotKey, value: &T) -> Result<(), StorageErr> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| {
            StorageErr::SerializeSnapshotErr(SerializeSnapshotErr {
                key: key.to_string(),
                source: e,
                trace: trace!(),
            })
        })?;
        let file = self.file(key);
        file.write_bytes(&bytes).await?;
        debug!("saved {} snapshot to {} ({} bytes)", key, file, bytes.len());
        Ok(())
    }

    /// Returns `None` when no snapshot has been saved. A snapshot that cannot be
    /// parsed is reported and also treated as absent.
    pub async fn load<T: DeserializeOwned>(
        &self,
        key: SnapshotKey,
    ) -> Result<Option<T>, StorageErr> {
        let file = self.file(key);
        if !file.exists() {
            return Ok(None);
        }
        match file.read_json::<T>().await {
            Ok(value) => Ok(Some(value)),
            Err(FileSysErr::NotFoundErr(_)) => Ok(None),
            Err(FileSysErr::JsonErr(e)) => {
                error!("ignoring corrupt {} snapshot: {}", key, e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
