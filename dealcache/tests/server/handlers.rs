// standard library
use std::sync::Arc;

// internal crates
use crate::mock::{deal, run_server, store, Server};
use cheapshark_api::models::Store;
use dealcache::cache::{self, Origin};
use dealcache::models::DealsByStore;
use dealcache::server::{serve::router, state::ServerState};
use dealcache::version::build_info;
use deals_api::models::{
    DealsBody, DealsResponse, ErrorResponse, HealthResponse, Source, StoresResponse,
    VersionResponse,
};

// external crates
use reqwest::StatusCode;

async fn start(top_deals_count: usize) -> (cache::Writer, Server) {
    let (writer, reader) = cache::new();
    let state = Arc::new(ServerState::new(reader, top_deals_count));
    let server = run_server(router(state)).await;
    (writer, server)
}

async fn get(server: &Server, path: &str) -> reqwest::Response {
    reqwest::get(format!("{}{}", server.base_url, path))
        .await
        .unwrap()
}

fn steam_and_gog() -> DealsByStore {
    let mut deals = DealsByStore::new();
    deals.insert(
        "Steam".to_string(),
        vec![deal("steam-a", "9.99"), deal("steam-b", "4.99")],
    );
    deals.insert("GOG".to_string(), vec![deal("gog-a", "14.99")]);
    deals
}

pub mod list_stores {
    use super::*;

    #[tokio::test]
    async fn unpopulated() {
        let (_writer, server) = start(3).await;
        let resp = get(&server, "/stores").await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(body.error, "No cached stores available.");
    }

    #[tokio::test]
    async fn populated() {
        let (writer, server) = start(3).await;
        writer.set_stores(vec![store("1", "Steam")], Origin::Disk);

        let resp = get(&server, "/stores").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "source": "disk",
                "stores": [{"storeID": "1", "storeName": "Steam"}],
            })
        );
    }

    #[tokio::test]
    async fn empty_list() {
        let (writer, server) = start(3).await;
        writer.set_stores(Vec::<Store>::new(), Origin::Upstream);

        let resp = get(&server, "/stores").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: StoresResponse = resp.json().await.unwrap();
        assert_eq!(body, StoresResponse::new(vec![]));
    }
}

pub mod list_deals {
    use super::*;

    #[tokio::test]
    async fn unpopulated() {
        let (_writer, server) = start(3).await;
        for path in ["/deals", "/deals/", "/deals/?store_name=Steam"] {
            let resp = get(&server, path).await;
            assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{path}");
            let body: ErrorResponse = resp.json().await.unwrap();
            assert_eq!(body.error, "No cached deals available.");
        }
    }

    #[tokio::test]
    async fn whole_mapping_on_both_paths() {
        let (writer, server) = start(3).await;
        writer.set_deals(steam_and_gog(), Origin::Upstream);

        for path in ["/deals", "/deals/"] {
            let resp = get(&server, path).await;
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
            let body: DealsResponse = resp.json().await.unwrap();
            assert_eq!(body.source, Source::Disk);
            assert_eq!(body.deals, DealsBody::ByStore(steam_and_gog()));
        }
    }

    #[tokio::test]
    async fn one_store() {
        let (writer, server) = start(3).await;
        writer.set_deals(steam_and_gog(), Origin::Upstream);

        let resp = get(&server, "/deals/?store_name=GOG").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: DealsResponse = resp.json().await.unwrap();
        assert_eq!(body.deals, DealsBody::List(vec![deal("gog-a", "14.99")]));
    }

    #[tokio::test]
    async fn store_name_is_url_decoded() {
        let (writer, server) = start(3).await;
        let mut deals = DealsByStore::new();
        deals.insert("Epic Games Store".to_string(), vec![deal("a", "1.00")]);
        writer.set_deals(deals, Origin::Upstream);

        let resp = get(&server, "/deals?store_name=Epic%20Games%20Store").await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn store_not_found() {
        let (writer, server) = start(3).await;
        writer.set_deals(steam_and_gog(), Origin::Upstream);

        let resp = get(&server, "/deals/?store_name=Origin").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "No deals found for store 'Origin'"})
        );
    }

    #[tokio::test]
    async fn empty_mapping() {
        let (writer, server) = start(3).await;
        writer.set_deals(DealsByStore::new(), Origin::Upstream);

        let resp = get(&server, "/deals/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"source": "disk", "deals": {}}));
    }
}

pub mod top_deals {
    use super::*;

    #[tokio::test]
    async fn unpopulated() {
        let (_writer, server) = start(3).await;
        let resp = get(&server, "/deals/top").await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(body.error, "No cached deals available.");
    }

    #[tokio::test]
    async fn cheapest_first() {
        let (writer, server) = start(3).await;
        writer.set_deals(steam_and_gog(), Origin::Upstream);

        let resp = get(&server, "/deals/top").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "source": "disk",
                "deals": [
                    {"title": "steam-b", "price": "4.99"},
                    {"title": "steam-a", "price": "9.99"},
                    {"title": "gog-a", "price": "14.99"},
                ],
            })
        );
    }

    #[tokio::test]
    async fn configured_count() {
        let (writer, server) = start(1).await;
        writer.set_deals(steam_and_gog(), Origin::Upstream);

        let body: DealsResponse = get(&server, "/deals/top").await.json().await.unwrap();
        assert_eq!(body.deals, DealsBody::List(vec![deal("steam-b", "4.99")]));
    }
}

pub mod health {
    use super::*;

    #[tokio::test]
    async fn empty_cache() {
        let (_writer, server) = start(3).await;
        let resp = get(&server, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn reports_load_times() {
        let (writer, server) = start(3).await;
        let stores = writer.set_stores(vec![store("1", "Steam")], Origin::Disk);

        let body: HealthResponse = get(&server, "/health").await.json().await.unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.stores_loaded_at, Some(stores.loaded_at.to_rfc3339()));
        assert_eq!(body.deals_loaded_at, None);
    }
}

pub mod version {
    use super::*;

    #[tokio::test]
    async fn reports_build_info() {
        let (_writer, server) = start(3).await;
        let resp = get(&server, "/version").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: VersionResponse = resp.json().await.unwrap();
        let expected = build_info();
        assert_eq!(body.version, expected.version);
        assert_eq!(body.commit, expected.commit);
    }
}

pub mod routing {
    use super::*;

    #[tokio::test]
    async fn unknown_path() {
        let (_writer, server) = start(3).await;
        let resp = get(&server, "/games").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn read_only() {
        let (_writer, server) = start(3).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/stores", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn allows_any_origin() {
        let (writer, server) = start(3).await;
        writer.set_stores(vec![store("1", "Steam")], Origin::Disk);

        let resp = reqwest::Client::new()
            .get(format!("{}/stores", server.base_url))
            .header("Origin", "https://example.com")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .unwrap()
                .to_str()
                .unwrap(),
            "*"
        );
    }
}
