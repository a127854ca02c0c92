//! Wire models for the CheapShark price-comparison API (`/api/1.0`).

pub mod models;
