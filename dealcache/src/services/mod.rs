pub mod deals;
pub mod errors;
pub mod stores;

pub use errors::ServiceErr;
