pub mod deal;
pub use self::deal::Deal;
pub mod store;
pub use self::store::Store;
