pub mod client;
pub mod errors;
pub mod query;
pub mod request;
pub mod response;

pub use client::{Client, ClientI};
