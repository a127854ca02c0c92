pub mod app;
pub mod cache;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod models;
pub mod refresh;
pub mod scheduler;
pub mod server;
pub mod services;
pub mod storage;
pub mod upstream;
pub mod version;
