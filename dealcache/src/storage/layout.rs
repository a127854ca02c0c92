// internal crates
use crate::filesys::dir::Dir;
use crate::filesys::file::File;

#[derive(Clone, Debug)]
pub struct StorageLayout {
    pub root: Dir,
}

impl StorageLayout {
    pub fn new(root: Dir) -> Self {
        Self { root }
    }

    pub fn stores_file(&self) -> File {
        self.root.file("stores.json")
    }

    pub fn deals_file(&self) -> File {
        self.root.file("deals.json")
    }

    pub fn settings_file(&self) -> File {
        self.root.file("settings.json")
    }

    pub fn log_dir(&self) -> Dir {
        self.root.subdir("logs")
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::new(Dir::new("data"))
    }
}
