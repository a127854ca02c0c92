// internal crates
use crate::errors::Trace;

#[derive(Debug, thiserror::Error)]
#[error("scheduler has been stopped")]
pub struct StoppedErr {
    pub trace: Box<Trace>,
}

impl crate::errors::Error for StoppedErr {}

#[derive(Debug, thiserror::Error)]
#[error("scheduler has already been started")]
pub struct AlreadyStartedErr {
    pub trace: Box<Trace>,
}

impl crate::errors::Error for AlreadyStartedErr {}

#[derive(Debug, thiserror::Error)]
#[error("job '{job}' must have a non-zero interval")]
pub struct ZeroIntervalErr {
    pub job: String,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ZeroIntervalErr {}

#[derive(Debug, thiserror::Error)]
pub enum SchedulerErr {
    #[error(transparent)]
    StoppedErr(StoppedErr),
    #[error(transparent)]
    AlreadyStartedErr(AlreadyStartedErr),
    #[error(transparent)]
    ZeroIntervalErr(ZeroIntervalErr),
}

crate::impl_error!(SchedulerErr {
    StoppedErr,
    AlreadyStartedErr,
    ZeroIntervalErr,
});
