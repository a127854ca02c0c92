// internal crates
use crate::errors::{Code, Error, Trace};
use crate::http::errors::HTTPErr;

#[derive(Debug, thiserror::Error)]
#[error("upstream request failed: {source}")]
pub struct RefreshHTTPErr {
    pub source: HTTPErr,
    pub trace: Box<Trace>,
}

crate::impl_source_error!(RefreshHTTPErr);

#[derive(Debug, thiserror::Error)]
#[error("no stores are known: the stores refresh failed and none are cached")]
pub struct NoKnownStoresErr {
    pub trace: Box<Trace>,
}

impl Error for NoKnownStoresErr {}

#[derive(Debug, thiserror::Error)]
#[error("upstream returned an empty store list")]
pub struct EmptyStoresErr {
    pub trace: Box<Trace>,
}

impl Error for EmptyStoresErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }
}

#[derive(Debug, thiserror::Error)]
#[error("store selection matched none of the {known} known stores")]
pub struct NoStoresSelectedErr {
    pub known: usize,
    pub trace: Box<Trace>,
}

impl Error for NoStoresSelectedErr {}

#[derive(Debug, thiserror::Error)]
#[error("all {attempted} selected stores failed and none had cached deals to keep")]
pub struct AllStoresFailedErr {
    pub attempted: usize,
    pub trace: Box<Trace>,
}

impl Error for AllStoresFailedErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshErr {
    #[error(transparent)]
    HTTPErr(RefreshHTTPErr),
    #[error(transparent)]
    EmptyStoresErr(EmptyStoresErr),
    #[error(transparent)]
    NoKnownStoresErr(NoKnownStoresErr),
    #[error(transparent)]
    NoStoresSelectedErr(NoStoresSelectedErr),
    #[error(transparent)]
    AllStoresFailedErr(AllStoresFailedErr),
}

crate::impl_error!(RefreshErr {
    HTTPErr,
    EmptyStoresErr,
    NoKnownStoresErr,
    NoStoresSelectedErr,
    AllStoresFailedErr,
});

impl From<HTTPErr> for RefreshErr {
    fn from(e: HTTPErr) -> Self {
        RefreshErr::HTTPErr(RefreshHTTPErr {
            source: e,
            trace: crate::trace!(),
        })
    }
}
