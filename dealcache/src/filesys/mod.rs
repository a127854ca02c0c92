//! Async helpers over the data directory: typed paths, JSON reads and atomic
//! whole-file writes.

pub mod dir;
pub mod errors;
pub mod file;
pub mod path;
