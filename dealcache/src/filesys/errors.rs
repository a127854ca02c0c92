// standard library
use std::fmt;
use std::path::PathBuf;

// internal crates
use crate::errors::Trace;

/// The filesystem call that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoOp {
    CreateDir,
    Read,
    Replace,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            IoOp::CreateDir => "create directory",
            IoOp::Read => "read",
            IoOp::Replace => "atomically replace",
        };
        write!(f, "{op}")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("'{}' does not exist", .path.display())]
pub struct NotFoundErr {
    pub path: PathBuf,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for NotFoundErr {}

#[derive(Debug, thiserror::Error)]
#[error("'{}' has no parent directory", .path.display())]
pub struct NoParentDirErr {
    pub path: PathBuf,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for NoParentDirErr {}

#[derive(Debug, thiserror::Error)]
#[error("failed to {op} '{}': {source}", .path.display())]
pub struct IoErr {
    pub op: IoOp,
    pub path: PathBuf,
    pub source: std::io::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for IoErr {}

#[derive(Debug, thiserror::Error)]
#[error("invalid JSON in '{}': {source}", .path.display())]
pub struct JsonErr {
    pub path: PathBuf,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for JsonErr {}

#[derive(Debug, thiserror::Error)]
pub enum FileSysErr {
    #[error(transparent)]
    NotFoundErr(Box<NotFoundErr>),
    #[error(transparent)]
    NoParentDirErr(Box<NoParentDirErr>),
    #[error(transparent)]
    IoErr(Box<IoErr>),
    #[error(transparent)]
    JsonErr(Box<JsonErr>),
}

crate::impl_error!(FileSysErr {
    NotFoundErr,
    NoParentDirErr,
    IoErr,
    JsonErr,
});

impl FileSysErr {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if op == IoOp::Read && source.kind() == std::io::ErrorKind::NotFound {
            return FileSysErr::NotFoundErr(Box::new(NotFoundErr {
                path,
                trace: crate::trace!(),
            }));
        }
        FileSysErr::IoErr(Box::new(IoErr {
            op,
            path,
            source,
            trace: crate::trace!(),
        }))
    }
}
