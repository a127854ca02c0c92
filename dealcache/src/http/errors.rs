// internal crates
use crate::errors::{Code, HTTPCode, Trace};
use crate::http::request::Endpoint;

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} returned {status}: {}", .body.as_deref().unwrap_or("<empty body>"))]
pub struct StatusErr {
    pub endpoint: Endpoint,
    pub status: reqwest::StatusCode,
    /// A truncated excerpt of the response body.
    pub body: Option<String>,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for StatusErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::BAD_GATEWAY
    }

    fn params(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "status": self.status.as_u16() }))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} timed out")]
pub struct TimeoutErr {
    pub endpoint: Endpoint,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for TimeoutErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::GATEWAY_TIMEOUT
    }

    fn is_network_connection_error(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} could not connect: {source}")]
pub struct ConnectionErr {
    pub endpoint: Endpoint,
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ConnectionErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::BAD_GATEWAY
    }

    fn is_network_connection_error(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} body could not be read: {source}")]
pub struct ReadBodyErr {
    pub endpoint: Endpoint,
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ReadBodyErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} returned invalid JSON: {source}")]
pub struct InvalidJSONErr {
    pub endpoint: Endpoint,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidJSONErr {
    fn code(&self) -> Code {
        Code::UpstreamError
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{endpoint} failed: {source}")]
pub struct TransportErr {
    pub endpoint: Endpoint,
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for TransportErr {}

#[derive(Debug, thiserror::Error)]
#[error("unable to build http client: {source}")]
pub struct BuildClientErr {
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for BuildClientErr {}

/// Stand-in failure for test clients.
#[derive(Debug, thiserror::Error)]
#[error("mock failure (network: {network})")]
pub struct MockErr {
    pub network: bool,
}

impl crate::errors::Error for MockErr {
    fn is_network_connection_error(&self) -> bool {
        self.network
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HTTPErr {
    #[error(transparent)]
    StatusErr(StatusErr),
    #[error(transparent)]
    TimeoutErr(TimeoutErr),
    #[error(transparent)]
    ConnectionErr(ConnectionErr),
    #[error(transparent)]
    ReadBodyErr(ReadBodyErr),
    #[error(transparent)]
    InvalidJSONErr(InvalidJSONErr),
    #[error(transparent)]
    TransportErr(TransportErr),
    #[error(transparent)]
    BuildClientErr(BuildClientErr),
    #[error(transparent)]
    MockErr(MockErr),
}

crate::impl_error!(HTTPErr {
    StatusErr,
    TimeoutErr,
    ConnectionErr,
    ReadBodyErr,
    InvalidJSONErr,
    TransportErr,
    BuildClientErr,
    MockErr,
});

impl HTTPErr {
    /// Sorts a reqwest failure by cause.
    pub(crate) fn from_reqwest(
        source: reqwest::Error,
        endpoint: &Endpoint,
        trace: Box<Trace>,
    ) -> Self {
        let endpoint = endpoint.clone();
        if source.is_timeout() {
            HTTPErr::TimeoutErr(TimeoutErr { endpoint, trace })
        } else if source.is_connect() {
            HTTPErr::ConnectionErr(ConnectionErr {
                endpoint,
                source,
                trace,
            })
        } else if source.is_body() || source.is_decode() {
            HTTPErr::ReadBodyErr(ReadBodyErr {
                endpoint,
                source,
                trace,
            })
        } else {
            HTTPErr::TransportErr(TransportErr {
                endpoint,
                source,
                trace,
            })
        }
    }
}
