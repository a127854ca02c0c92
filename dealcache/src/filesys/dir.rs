// standard library
use std::fmt;
use std::path::{Path, PathBuf};

// internal crates
use crate::filesys::{
    errors::{FileSysErr, IoOp},
    file::File,
    path::PathExt,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dir {
    path: PathBuf,
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl PathExt for Dir {
    fn path(&self) -> &Path {
        &self.path
    }
}

impl Dir {
    /// The directory does not need to exist.
    pub fn new<T: Into<PathBuf>>(path: T) -> Dir {
        Dir { path: path.into() }
    }

    /// Joins `rel_path` onto this directory. A leading separator is ignored so the
    /// result always stays inside `self`.
    pub fn subdir<T: AsRef<Path>>(&self, rel_path: T) -> Dir {
        let rel_path = rel_path.as_ref();
        let rel_path = rel_path.strip_prefix("/").unwrap_or(rel_path);
        Dir::new(self.path.join(rel_path))
    }

    pub fn file(&self, file_name: &str) -> File {
        File::new(self.path.join(file_name))
    }

    /// Creates the directory and any missing parents. Succeeds if it already exists.
    pub async fn ensure(&self) -> Result<(), FileSysErr> {
        tokio::fs::create_dir_all(&self.path)
            .await
            .map_err(|e| FileSysErr::io(IoOp::CreateDir, &self.path, e))
    }
}
