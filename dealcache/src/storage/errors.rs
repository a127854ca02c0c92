// internal crates
use crate::errors::{Error, Trace};
use crate::filesys::errors::FileSysErr;

#[derive(Debug, thiserror::Error)]
#[error("file system error: {source}")]
pub struct StorageFileSysErr {
    pub source: FileSysErr,
    pub trace: Box<Trace>,
}

crate::impl_source_error!(StorageFileSysErr);

#[derive(Debug, thiserror::Error)]
#[error("failed to serialize snapshot '{key}': {source}")]
pub struct SerializeSnapshotErr {
    pub key: String,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl Error for SerializeSnapshotErr {}

#[derive(Debug, thiserror::Error)]
pub enum StorageErr {
    #[error(transparent)]
    FileSysErr(StorageFileSysErr),
    #[error(transparent)]
    SerializeSnapshotErr(SerializeSnapshotErr),
}

crate::impl_error!(StorageErr {
    FileSysErr,
    SerializeSnapshotErr,
});

impl From<FileSysErr> for StorageErr {
    fn from(e: FileSysErr) -> Self {
        StorageErr::FileSysErr(StorageFileSysErr {
            source: e,
            trace: crate::trace!(),
        })
    }
}
