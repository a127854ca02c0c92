//! Response models for the read-only deals HTTP API.

pub mod models;
