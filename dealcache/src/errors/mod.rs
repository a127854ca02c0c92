// standard library
use std::fmt;

// external crates
use axum::http::StatusCode;

pub type HTTPCode = StatusCode;

/// Machine-readable error category, logged alongside every failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    InternalServerError,
    ResourceNotFound,
    CacheUnpopulated,
    UpstreamError,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Code::InternalServerError => "internal_server_error",
            Code::ResourceNotFound => "resource_not_found",
            Code::CacheUnpopulated => "cache_unpopulated",
            Code::UpstreamError => "upstream_error",
        })
    }
}

/// Implemented by every error in the crate. The defaults describe an internal
/// failure; leaf errors override what differs.
pub trait Error: std::error::Error {
    fn code(&self) -> Code {
        Code::InternalServerError
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::INTERNAL_SERVER_ERROR
    }

    /// Structured context for logs.
    fn params(&self) -> Option<serde_json::Value> {
        None
    }

    fn is_network_connection_error(&self) -> bool {
        false
    }
}

impl<T: Error> Error for Box<T> {
    fn code(&self) -> Code {
        (**self).code()
    }

    fn http_status(&self) -> HTTPCode {
        (**self).http_status()
    }

    fn params(&self) -> Option<serde_json::Value> {
        (**self).params()
    }

    fn is_network_connection_error(&self) -> bool {
        (**self).is_network_connection_error()
    }
}

/// Where an error was constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[macro_export]
macro_rules! trace {
    () => {
        Box::new($crate::errors::Trace {
            file: file!(),
            line: line!(),
        })
    };
}

/// Implements `errors::Error` for an enum whose variants each wrap one error by
/// forwarding to the wrapped value.
#[macro_export]
macro_rules! impl_error {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $name {
            fn inner(&self) -> &dyn $crate::errors::Error {
                match self {
                    $(Self::$variant(e) => e,)+
                }
            }
        }

        impl $crate::errors::Error for $name {
            fn code(&self) -> $crate::errors::Code {
                self.inner().code()
            }
            fn http_status(&self) -> $crate::errors::HTTPCode {
                self.inner().http_status()
            }
            fn params(&self) -> Option<serde_json::Value> {
                self.inner().params()
            }
            fn is_network_connection_error(&self) -> bool {
                self.inner().is_network_connection_error()
            }
        }
    };
}

/// Implements `errors::Error` for a struct that adds context around a `source`
/// error of the crate, reporting whatever the source reports.
#[macro_export]
macro_rules! impl_source_error {
    ($name:ident) => {
        impl $crate::errors::Error for $name {
            fn code(&self) -> $crate::errors::Code {
                $crate::errors::Error::code(&self.source)
            }
            fn http_status(&self) -> $crate::errors::HTTPCode {
                $crate::errors::Error::http_status(&self.source)
            }
            fn params(&self) -> Option<serde_json::Value> {
                $crate::errors::Error::params(&self.source)
            }
            fn is_network_connection_error(&self) -> bool {
                $crate::errors::Error::is_network_connection_error(&self.source)
            }
        }
    };
}

/// Logs a settings field that was absent and evaluates to `$default`.
#[macro_export]
macro_rules! deserialize_warn {
    ($struct_name:expr, $field_name:expr, $default:expr) => {{
        let default = $default;
        ::tracing::warn!(
            "{}.{} not set, defaulting to {:?}",
            $struct_name,
            $field_name,
            default
        );
        default
    }};
}
