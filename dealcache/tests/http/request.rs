// internal crates
use dealcache::http::{query::QueryParams, request::Params};

// external crates
use tokio::time::Duration;

pub mod endpoint {
    use super::*;

    #[test]
    fn without_query() {
        let endpoint = Params::get("http://mock/stores", Duration::from_secs(10)).endpoint();
        assert_eq!(endpoint.url, "http://mock/stores");
        assert_eq!(endpoint.to_string(), "GET http://mock/stores (timeout 10000ms)");
    }

    #[test]
    fn with_query() {
        let params = Params::get("http://mock/deals", Duration::from_millis(500))
            .with_query(QueryParams::new().add("onSale", "1").add("storeID", "3"));
        assert_eq!(params.endpoint().url, "http://mock/deals?onSale=1&storeID=3");
    }
}
