// standard library
use std::sync::Arc;

// internal crates
use crate::scheduler::{
    errors::{AlreadyStartedErr, SchedulerErr, StoppedErr, ZeroIntervalErr},
    job::Job,
    trigger::Trigger,
};
use crate::trace;

// external crates
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Pending,
    Running,
    Stopped,
}

/// Runs each scheduled job as its own tokio task on a fixed interval. Missed ticks
/// are skipped rather than replayed.
pub struct Scheduler {
    state: State,
    pending: Vec<(Arc<dyn Job>, Trigger)>,
    handles: Vec<JoinHandle<()>>,
    shutdown_tx: broadcast::Sender<()>,
}

impl Scheduler {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            state: State::Pending,
            pending: Vec::new(),
            handles: Vec::new(),
            shutdown_tx,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Registers a job. Jobs scheduled on a running scheduler start immediately.
    pub fn schedule(
        &mut self,
        job: Arc<dyn Job>,
        trigger: impl Into<Trigger>,
    ) -> Result<(), SchedulerErr> {
        let trigger = trigger.into();
        if self.state == State::Stopped {
            return Err(SchedulerErr::StoppedErr(StoppedErr { trace: trace!() }));
        }
        if trigger.interval.is_zero() {
            return Err(SchedulerErr::ZeroIntervalErr(ZeroIntervalErr {
                job: job.name().to_string(),
                trace: trace!(),
            }));
        }
        match self.state {
            State::Running => self.spawn(job, trigger),
            _ => self.pending.push((job, trigger)),
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), SchedulerErr> {
        match self.state {
            State::Stopped => Err(SchedulerErr::StoppedErr(StoppedErr { trace: trace!() })),
            State::Running => Err(SchedulerErr::AlreadyStartedErr(AlreadyStartedErr {
                trace: trace!(),
            })),
            State::Pending => {
                self.state = State::Running;
                for (job, trigger) in std::mem::take(&mut self.pending) {
                    self.spawn(job, trigger);
                }
                Ok(())
            }
        }
    }

    /// Signals every job task to exit and waits for them. In-flight runs are dropped
    /// at their next suspension point.
    pub async fn stop(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        self.state = State::Stopped;
        self.pending.clear();
        let _ = self.shutdown_tx.send(());

        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                error!("scheduled job task failed: {}", e);
            }
        }
        info!("scheduler stopped");
    }

    fn spawn(&mut self, job: Arc<dyn Job>, trigger: Trigger) {
        let shutdown_rx = self.shutdown_tx.subscribe();
        self.handles
            .push(tokio::spawn(run_job(job, trigger, shutdown_rx)));
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

const MISFIRE_GRACE: Duration = Duration::from_secs(1);

async fn run_job(job: Arc<dyn Job>, trigger: Trigger, mut shutdown_rx: broadcast::Receiver<()>) {
    let first_tick = match trigger.fire_on_start {
        true => Instant::now(),
        false => Instant::now() + trigger.interval,
    };
    let mut ticker = interval_at(first_tick, trigger.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(
        "scheduled job '{}' every {:?} (fire on start: {})",
        job.name(),
        trigger.interval,
        trigger.fire_on_start
    );

    loop {
        let scheduled = tokio::select! {
            biased;
            _ = shutdown_rx.recv() => {
                debug!("job '{}' received shutdown signal", job.name());
                return;
            }
            scheduled = ticker.tick() => scheduled,
        };

        // a tick missed during a long run is dropped, the next one fires on schedule
        let late = scheduled.elapsed();
        if late > MISFIRE_GRACE {
            debug!("dropping missed tick of job '{}' ({:?} late)", job.name(), late);
            continue;
        }

        debug!("running job '{}'", job.name());
        tokio::select! {
            biased;
            _ = shutdown_rx.recv() => {
                warn!("abandoning in-flight run of job '{}'", job.name());
                return;
            }
            _ = job.run() => {}
        }
    }
}
