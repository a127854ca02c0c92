pub mod errors;
pub mod job;
pub mod runner;
pub mod trigger;

pub use errors::SchedulerErr;
pub use job::Job;
pub use runner::Scheduler;
pub use trigger::Trigger;
