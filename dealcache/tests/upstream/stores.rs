// internal crates
use crate::mock::{network_err, store, MockClient};
use dealcache::upstream::fetch_stores;

// external crates
use tokio::time::Duration;

pub mod fetch_stores {
    use super::*;

    #[tokio::test]
    async fn returns_upstream_list() {
        let client = MockClient::default();
        client.set_stores(|| Ok(vec![store("1", "Steam"), store("7", "GOG")]));
        let stores = fetch_stores(&client, Duration::from_secs(1)).await.unwrap();
        assert_eq!(stores, vec![store("1", "Steam"), store("7", "GOG")]);
        assert_eq!(client.num_stores_calls(), 1);
    }

    #[tokio::test]
    async fn propagates_errors() {
        let client = MockClient::default();
        client.set_stores(|| Err(network_err()));
        assert!(fetch_stores(&client, Duration::from_secs(1)).await.is_err());
    }

    #[test]
    fn keeps_opaque_fields() {
        let raw = r#"{"storeID":"1","storeName":"Steam","isActive":1,"images":{"logo":"/l.png"}}"#;
        let parsed: cheapshark_api::models::Store = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.name, "Steam");
        assert_eq!(parsed.other["isActive"], 1);
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }
}
