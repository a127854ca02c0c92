// standard library
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

// internal crates
use crate::server::errors::{BindTcpListenerErr, InvalidAddressErr, RunAxumServerErr, ServerErr};
use crate::server::handlers;
use crate::server::state::ServerState;
use crate::trace;

// external
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, Level};

#[derive(Clone, Debug)]
pub struct ServerOptions {
    pub address: String,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8000".to_string(),
        }
    }
}

impl ServerOptions {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerErr> {
        self.address.parse::<SocketAddr>().map_err(|e| {
            ServerErr::InvalidAddressErr(InvalidAddressErr {
                address: self.address.clone(),
                source: e,
                trace: trace!(),
            })
        })
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        // ================================ INFO =================================== //
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        // ================================ DEALS ================================== //
        .route("/deals", get(handlers::list_deals))
        .route("/deals/", get(handlers::list_deals))
        .route("/deals/top", get(handlers::top_deals))
        // ================================ STORES ================================= //
        .route("/stores", get(handlers::list_stores))
        // ================================ LAYERS ================================= //
        .layer(
            ServiceBuilder::new()
                // logging middleware
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().include_headers(true))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Micros),
                        ),
                )
                // cors middleware
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Binds the listener and serves the API until `shutdown_signal` resolves. Returns
/// the bound address, which differs from the configured one when binding port 0.
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(JoinHandle<Result<(), ServerErr>>, SocketAddr), ServerErr> {
    let address = options.socket_addr()?;
    let listener = TcpListener::bind(address).await.map_err(|e| {
        ServerErr::BindTcpListenerErr(BindTcpListenerErr {
            address,
            source: e,
            trace: trace!(),
        })
    })?;
    let local_addr = listener.local_addr().map_err(|e| {
        ServerErr::BindTcpListenerErr(BindTcpListenerErr {
            address,
            source: e,
            trace: trace!(),
        })
    })?;
    info!("serving deals api on http://{}", local_addr);

    let app = router(state);
    let server_handle = tokio::task::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| {
                ServerErr::RunAxumServerErr(RunAxumServerErr {
                    source: e,
                    trace: trace!(),
                })
            })
    });

    Ok((server_handle, local_addr))
}
