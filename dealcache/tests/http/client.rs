// standard library
use std::collections::HashMap;

// internal crates
use crate::mock::run_server;
use dealcache::errors::Error;
use dealcache::http::{
    client::fetch,
    errors::HTTPErr,
    query::QueryParams,
    request::Params,
    Client, ClientI,
};

// external crates
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::time::Duration;

async fn stores() -> Json<Value> {
    Json(json!([{"storeID": "1", "storeName": "Steam", "isActive": 1}]))
}

async fn echo_query(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!(query))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "no such route")
}

async fn bad_json() -> &'static str {
    "<html>rate limited</html>"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!([]))
}

fn router() -> Router {
    Router::new()
        .route("/stores", get(stores))
        .route("/echo", get(echo_query))
        .route("/missing", get(not_found))
        .route("/bad", get(bad_json))
        .route("/slow", get(slow))
}

pub mod new {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = Client::new("http://localhost:1234/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}

pub mod execute {
    use super::*;

    #[tokio::test]
    async fn success() {
        let server = run_server(router()).await;
        let client = Client::new(&server.base_url).unwrap();
        let url = format!("{}/stores", client.base_url());
        let body = client
            .execute(Params::get(&url, Duration::from_secs(5)))
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value[0]["storeName"], "Steam");
    }

    #[tokio::test]
    async fn sends_query_params() {
        let server = run_server(router()).await;
        let client = Client::new(&server.base_url).unwrap();
        let url = format!("{}/echo", client.base_url());
        let params = Params::get(&url, Duration::from_secs(5))
            .with_query(QueryParams::new().add("onSale", "1").add("storeID", "2"));
        let echoed: HashMap<String, String> = fetch(&client, params).await.unwrap();
        assert_eq!(echoed.get("onSale").map(String::as_str), Some("1"));
        assert_eq!(echoed.get("storeID").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn non_success_status() {
        let server = run_server(router()).await;
        let client = Client::new(&server.base_url).unwrap();
        let url = format!("{}/missing", client.base_url());
        let err = client
            .execute(Params::get(&url, Duration::from_secs(5)))
            .await
            .unwrap_err();
        match err {
            HTTPErr::StatusErr(ref e) => {
                assert_eq!(e.status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(e.body.as_deref(), Some("no such route"));
            }
            other => panic!("expected StatusErr, got {other:?}"),
        }
        assert!(!err.is_network_connection_error());
    }

    #[tokio::test]
    async fn timeout() {
        let server = run_server(router()).await;
        let client = Client::new(&server.base_url).unwrap();
        let url = format!("{}/slow", client.base_url());
        let err = client
            .execute(Params::get(&url, Duration::from_millis(100)))
            .await
            .unwrap_err();
        assert!(matches!(err, HTTPErr::TimeoutErr(_)), "{err:?}");
        assert!(err.is_network_connection_error());
    }

    #[tokio::test]
    async fn connection_refused() {
        // bind then drop so nothing is listening on the port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&format!("http://{addr}")).unwrap();
        let url = format!("{}/stores", client.base_url());
        let err = client
            .execute(Params::get(&url, Duration::from_secs(5)))
            .await
            .unwrap_err();
        assert!(err.is_network_connection_error(), "{err:?}");
    }
}

pub mod fetch_json {
    use super::*;

    #[tokio::test]
    async fn malformed_json() {
        let server = run_server(router()).await;
        let client = Client::new(&server.base_url).unwrap();
        let url = format!("{}/bad", client.base_url());
        let err = fetch::<Vec<Value>>(&client, Params::get(&url, Duration::from_secs(5)))
            .await
            .unwrap_err();
        assert!(matches!(err, HTTPErr::InvalidJSONErr(_)));
    }
}
