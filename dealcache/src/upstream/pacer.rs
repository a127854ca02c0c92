// external crates
use tokio::time::{sleep_until, Duration, Instant};

/// Keeps a minimum quiet gap between consecutive units of work. The gap runs from
/// the end of one unit to the start of the next, so slow work never shortens it.
/// The first unit does not wait and nothing waits after the last one.
#[derive(Debug)]
pub struct Pacer {
    gap: Duration,
    last_done: Option<Instant>,
}

impl Pacer {
    pub fn new(gap: Duration) -> Self {
        Self {
            gap,
            last_done: None,
        }
    }

    /// Suspends until `gap` has passed since the last [`Pacer::done`].
    pub async fn ready(&self) {
        if let Some(last_done) = self.last_done {
            sleep_until(last_done + self.gap).await;
        }
    }

    /// Marks the end of a unit of work.
    pub fn done(&mut self) {
        self.last_done = Some(Instant::now());
    }
}
