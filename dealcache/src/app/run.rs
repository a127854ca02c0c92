// standard library
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

// internal crates
use crate::app::{options::AppOptions, state::AppState};
use crate::http::{self, ClientI};
use crate::refresh::{DealsJob, StoresJob};
use crate::scheduler::{Scheduler, Trigger};
use crate::server::{
    errors::{InvalidBaseURLErr, JoinHandleErr, ServerErr, ShutdownTimeoutErr},
    serve::serve,
    state::ServerState,
};
use crate::trace;

// external
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{error, info, warn};

/// Runs dealcache against the real upstream until `shutdown_signal` resolves.
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerErr> {
    let base_url = url::Url::parse(&options.upstream_base_url).map_err(|e| {
        ServerErr::InvalidBaseURLErr(InvalidBaseURLErr {
            base_url: options.upstream_base_url.clone(),
            source: e,
            trace: trace!(),
        })
    })?;
    let client = http::Client::new(base_url.as_str())?;
    run_with_client(options, client, shutdown_signal, |_| {}).await
}

/// Runs the service against `client` until `shutdown_signal` resolves. `on_ready`
/// receives the address the API is served on.
pub async fn run_with_client<C: ClientI + 'static>(
    options: AppOptions,
    client: C,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
    on_ready: impl FnOnce(SocketAddr),
) -> Result<(), ServerErr> {
    info!("Starting dealcache...");

    let (shutdown_tx, _) = broadcast::channel::<()>(1);
    let mut running = Running::default();

    match start(&options, client, &shutdown_tx, &mut running).await {
        Ok(addr) => on_ready(addr),
        Err(e) => {
            error!("Failed to start dealcache: {}", e);
            running
                .stop(&shutdown_tx, options.lifecycle.max_shutdown_delay)
                .await?;
            return Err(e);
        }
    }

    shutdown_signal.await;
    info!("Shutdown signal received");
    running
        .stop(&shutdown_tx, options.lifecycle.max_shutdown_delay)
        .await
}

// ================================== STARTUP ====================================== //
async fn start<C: ClientI + 'static>(
    options: &AppOptions,
    client: C,
    shutdown_tx: &broadcast::Sender<()>,
    running: &mut Running,
) -> Result<SocketAddr, ServerErr> {
    let app_state = AppState::init(client, &options.layout, options.refresh.clone()).await;

    running.scheduler = Some(start_scheduler(options, &app_state)?);

    let server_state = ServerState::new(app_state.cache.clone(), options.top_deals_count);
    let mut shutdown_rx = shutdown_tx.subscribe();
    let (handle, addr) = serve(&options.server, Arc::new(server_state), async move {
        let _ = shutdown_rx.recv().await;
    })
    .await?;
    running.server = Some(handle);
    Ok(addr)
}

fn start_scheduler<C: ClientI + 'static>(
    options: &AppOptions,
    app_state: &AppState<C>,
) -> Result<Scheduler, ServerErr> {
    let schedule = &options.schedule;
    info!(
        "Scheduling stores every {:?} and deals every {:?} (on startup: {})",
        schedule.stores_interval, schedule.deals_interval, schedule.on_startup
    );

    let mut scheduler = Scheduler::new();
    scheduler.schedule(
        Arc::new(StoresJob::new(app_state.refresher.clone())),
        Trigger::every(schedule.stores_interval).fire_on_start(schedule.on_startup),
    )?;
    scheduler.schedule(
        Arc::new(DealsJob::new(app_state.refresher.clone())),
        Trigger::every(schedule.deals_interval).fire_on_start(schedule.on_startup),
    )?;
    scheduler.start()?;
    Ok(scheduler)
}

// ================================= SHUTDOWN ===================================== //
/// Whatever has been started so far. Stopping tolerates a partial startup.
#[derive(Default)]
struct Running {
    scheduler: Option<Scheduler>,
    server: Option<JoinHandle<Result<(), ServerErr>>>,
}

impl Running {
    async fn stop(
        &mut self,
        shutdown_tx: &broadcast::Sender<()>,
        max_delay: Duration,
    ) -> Result<(), ServerErr> {
        let _ = shutdown_tx.send(());
        match tokio::time::timeout(max_delay, self.stop_in_order()).await {
            Ok(result) => result,
            Err(_) => Err(ServerErr::ShutdownTimeoutErr(ShutdownTimeoutErr {
                waited: max_delay,
                trace: trace!(),
            })),
        }
    }

    async fn stop_in_order(&mut self) -> Result<(), ServerErr> {
        // scheduler first so no refresh publishes while the server drains
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.stop().await;
        }

        match self.server.take() {
            Some(handle) => handle.await.map_err(|e| {
                ServerErr::JoinHandleErr(JoinHandleErr {
                    source: e,
                    trace: trace!(),
                })
            })??,
            None => warn!("server was never started"),
        }

        info!("dealcache stopped");
        Ok(())
    }
}
