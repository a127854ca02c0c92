// external crates
use tokio::time::Duration;

/// When a scheduled job runs: every `interval`, optionally also once as soon as the
/// scheduler starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub interval: Duration,
    pub fire_on_start: bool,
}

impl Trigger {
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            fire_on_start: false,
        }
    }

    pub fn fire_on_start(mut self, fire_on_start: bool) -> Self {
        self.fire_on_start = fire_on_start;
        self
    }
}

impl From<Duration> for Trigger {
    fn from(interval: Duration) -> Self {
        Trigger::every(interval)
    }
}
