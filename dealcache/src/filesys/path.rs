// standard library
use std::path::Path;

/// Shared behaviour of [`Dir`](super::dir::Dir) and [`File`](super::file::File).
pub trait PathExt {
    fn path(&self) -> &Path;

    fn exists(&self) -> bool {
        self.path().exists()
    }
}
