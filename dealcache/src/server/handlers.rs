// standard library
use std::sync::Arc;

// internal crates
use crate::errors::Error;
use crate::server::errors::ServerErr;
use crate::server::state::ServerState;
use crate::services::{
    deals::{self, DealsListing},
    stores,
};
use crate::version;
use deals_api::models::{
    DealsBody, DealsResponse, ErrorResponse, HealthResponse, StoresResponse, VersionResponse,
};

// external
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

// ================================= INFO ========================================== //
pub async fn health(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            stores_loaded_at: state
                .cache
                .stores()
                .map(|cached| cached.loaded_at.to_rfc3339()),
            deals_loaded_at: state
                .cache
                .deals()
                .map(|cached| cached.loaded_at.to_rfc3339()),
        }),
    )
}

pub async fn version() -> impl IntoResponse {
    let build_info = version::build_info();
    (
        StatusCode::OK,
        Json(VersionResponse {
            version: build_info.version,
            commit: build_info.commit,
        }),
    )
}

// ================================= DEALS ========================================= //
#[derive(Debug, Default, Deserialize)]
pub struct DealsQuery {
    pub store_name: Option<String>,
}

pub async fn list_deals(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DealsQuery>,
) -> impl IntoResponse {
    let service = async move {
        let listing = deals::list_deals(&state.cache, query.store_name.as_deref())?;
        let body = match listing {
            DealsListing::ByStore(by_store) => DealsBody::ByStore((*by_store).clone()),
            DealsListing::Store(store_deals) => DealsBody::List(store_deals),
        };
        Ok::<DealsResponse, ServerErr>(DealsResponse::new(body))
    };

    match service.await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response("listing deals", e),
    }
}

pub async fn top_deals(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let service = async move {
        let top = deals::top_deals(&state.cache, state.top_deals_count)?;
        Ok::<DealsResponse, ServerErr>(DealsResponse::new(DealsBody::List(top)))
    };

    match service.await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response("listing top deals", e),
    }
}

// ================================= STORES ======================================== //
pub async fn list_stores(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let service = async move {
        let stores = stores::list_stores(&state.cache)?;
        Ok::<StoresResponse, ServerErr>(StoresResponse::new((*stores).clone()))
    };

    match service.await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response("listing stores", e),
    }
}

// ================================ UTILITIES ====================================== //
fn error_response(action: &str, e: ServerErr) -> (StatusCode, Json<serde_json::Value>) {
    let status = e.http_status();
    let code = e.code();
    let params = e.params().unwrap_or_default();
    if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
        error!(%code, %params, "Error {action}: {e:?}");
    } else {
        warn!(%code, %params, "Error {action}: {e}");
    }
    (status, Json(json!(ErrorResponse::new(e.to_string()))))
}
