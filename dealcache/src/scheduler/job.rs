// external crates
use async_trait::async_trait;

/// A unit of repeating background work. Jobs handle and log their own failures.
#[async_trait]
pub trait Job: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self);
}
