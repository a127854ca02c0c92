pub mod errors;
pub mod layout;
pub mod settings;
pub mod snapshots;

pub use errors::StorageErr;
pub use layout::StorageLayout;
pub use settings::Settings;
pub use snapshots::{SnapshotKey, SnapshotStore};
