
// internal crates
use crate::mock::deal;
use dealcache::cache::{self, Origin};
use dealcache::models::DealsByStore;

/// `{"Steam": [9.99, 4.99], "GOG": [14.99]}`
pub fn steam_and_gog() -> DealsByStore {
    let mut deals = DealsByStore::new();
    deals.insert(
        "Steam".to_string(),
        vec![deal("steam-a", "9.99"), deal("steam-b", "4.99")],
    );
    deals.insert("GOG".to_string(), vec![deal("gog-a", "14.99")]);
    deals
}

pub fn populated(deals: DealsByStore) -> (cache::Writer, cache::Reader) {
    let (writer, reader) = cache::new();
    writer.set_deals(deals, Origin::Disk);
    (writer, reader)
}
