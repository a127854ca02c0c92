// standard library
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

// internal crates
use crate::filesys::{
    dir::Dir,
    errors::{FileSysErr, IoOp, JsonErr, NoParentDirErr},
    path::PathExt,
};
use crate::trace;

// external crates
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl PathExt for File {
    fn path(&self) -> &Path {
        &self.path
    }
}

impl File {
    pub fn new<T: Into<PathBuf>>(path: T) -> Self {
        File { path: path.into() }
    }

    pub fn parent(&self) -> Result<Dir, FileSysErr> {
        match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Ok(Dir::new(".")),
            Some(parent) => Ok(Dir::new(parent)),
            None => Err(FileSysErr::NoParentDirErr(Box::new(NoParentDirErr {
                path: self.path.clone(),
                trace: trace!(),
            }))),
        }
    }

    pub async fn read_json<T: DeserializeOwned>(&self) -> Result<T, FileSysErr> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FileSysErr::io(IoOp::Read, &self.path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| {
            FileSysErr::JsonErr(Box::new(JsonErr {
                path: self.path.clone(),
                source,
                trace: trace!(),
            }))
        })
    }

    /// Replaces the whole file with `buf`, creating the parent directory first. The
    /// bytes are staged in a temp file beside the destination and renamed into
    /// place, so readers see the old file or the new one, never a mix.
    pub async fn write_bytes(&self, buf: &[u8]) -> Result<(), FileSysErr> {
        self.parent()?.ensure().await?;
        AtomicFile::new(&self.path, AllowOverwrite)
            .write(|f| f.write_all(buf))
            .map_err(|e| FileSysErr::io(IoOp::Replace, &self.path, e.into()))
    }
}
