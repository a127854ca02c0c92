pub mod errors;
pub mod jobs;
pub mod refresher;
pub mod selection;

pub use errors::RefreshErr;
pub use jobs::{DealsJob, StoresJob};
pub use refresher::{RefreshOptions, Refreshed, Refresher};
pub use selection::StoreSelection;
