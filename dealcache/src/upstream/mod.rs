pub mod deals;
pub mod pacer;
pub mod stores;

pub use deals::{fetch_deals, DealPages};
pub use pacer::Pacer;
pub use stores::fetch_stores;

// standard library
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.cheapshark.com/api/1.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamOptions {
    pub timeout: Duration,
    pub page_size: usize,
    pub page_delay: Duration,
}

impl Default for UpstreamOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            page_size: 60,
            page_delay: Duration::from_secs(3),
        }
    }
}
