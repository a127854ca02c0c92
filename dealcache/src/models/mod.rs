pub mod deals;

pub use deals::{price_of, sort_by_price, DealsByStore};
