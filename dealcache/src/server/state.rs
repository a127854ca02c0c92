// internal crates
use crate::cache;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub cache: cache::Reader,
    pub top_deals_count: usize,
}

impl ServerState {
    pub fn new(cache: cache::Reader, top_deals_count: usize) -> Self {
        ServerState {
            cache,
            top_deals_count,
        }
    }
}
