// standard library
use std::net::SocketAddr;
use std::time::Duration;

// internal crates
use crate::errors::Trace;
use crate::http::errors::HTTPErr;
use crate::scheduler::errors::SchedulerErr;
use crate::services::errors::ServiceErr;

#[derive(Debug, thiserror::Error)]
#[error("'{address}' is not a valid socket address: {source}")]
pub struct InvalidAddressErr {
    pub address: String,
    pub source: std::net::AddrParseError,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidAddressErr {}

#[derive(Debug, thiserror::Error)]
#[error("'{base_url}' is not a valid upstream url: {source}")]
pub struct InvalidBaseURLErr {
    pub base_url: String,
    pub source: url::ParseError,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidBaseURLErr {}

#[derive(Debug, thiserror::Error)]
#[error("unable to listen on {address}: {source}")]
pub struct BindTcpListenerErr {
    pub address: SocketAddr,
    pub source: std::io::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for BindTcpListenerErr {}

#[derive(Debug, thiserror::Error)]
#[error("http server stopped with an error: {source}")]
pub struct RunAxumServerErr {
    pub source: std::io::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for RunAxumServerErr {}

#[derive(Debug, thiserror::Error)]
#[error("server task did not complete: {source}")]
pub struct JoinHandleErr {
    pub source: tokio::task::JoinError,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for JoinHandleErr {}

#[derive(Debug, thiserror::Error)]
#[error("shutdown did not finish within {waited:?}")]
pub struct ShutdownTimeoutErr {
    pub waited: Duration,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ShutdownTimeoutErr {}

#[derive(Debug, thiserror::Error)]
pub enum ServerErr {
    #[error(transparent)]
    InvalidAddressErr(InvalidAddressErr),
    #[error(transparent)]
    InvalidBaseURLErr(InvalidBaseURLErr),
    #[error(transparent)]
    BindTcpListenerErr(BindTcpListenerErr),
    #[error(transparent)]
    RunAxumServerErr(RunAxumServerErr),
    #[error(transparent)]
    JoinHandleErr(JoinHandleErr),
    #[error(transparent)]
    ShutdownTimeoutErr(ShutdownTimeoutErr),

    #[error(transparent)]
    HTTPErr(#[from] HTTPErr),
    #[error(transparent)]
    SchedulerErr(#[from] SchedulerErr),
    #[error(transparent)]
    ServiceErr(Box<ServiceErr>),
}

impl From<ServiceErr> for ServerErr {
    fn from(e: ServiceErr) -> Self {
        ServerErr::ServiceErr(Box::new(e))
    }
}

crate::impl_error!(ServerErr {
    InvalidAddressErr,
    InvalidBaseURLErr,
    BindTcpListenerErr,
    RunAxumServerErr,
    JoinHandleErr,
    ShutdownTimeoutErr,
    HTTPErr,
    SchedulerErr,
    ServiceErr,
});
