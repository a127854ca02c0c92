// standard library
use std::fmt;

// internal crates
use crate::errors::{Code, HTTPCode, Trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheField {
    Stores,
    Deals,
}

impl fmt::Display for CacheField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheField::Stores => write!(f, "stores"),
            CacheField::Deals => write!(f, "deals"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("No cached {field} available.")]
pub struct CacheUnpopulatedErr {
    pub field: CacheField,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for CacheUnpopulatedErr {
    fn code(&self) -> Code {
        Code::CacheUnpopulated
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::SERVICE_UNAVAILABLE
    }

    fn params(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "field": self.field.to_string() }))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("No deals found for store '{store_name}'")]
pub struct StoreNotFoundErr {
    pub store_name: String,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for StoreNotFoundErr {
    fn code(&self) -> Code {
        Code::ResourceNotFound
    }

    fn http_status(&self) -> HTTPCode {
        HTTPCode::NOT_FOUND
    }

    fn params(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "store_name": self.store_name }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceErr {
    #[error(transparent)]
    CacheUnpopulatedErr(CacheUnpopulatedErr),
    #[error(transparent)]
    StoreNotFoundErr(StoreNotFoundErr),
}

crate::impl_error!(ServiceErr {
    CacheUnpopulatedErr,
    StoreNotFoundErr,
});
