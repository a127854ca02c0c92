pub mod deals_response;
pub use self::deals_response::{DealsBody, DealsResponse};
pub mod error_response;
pub use self::error_response::ErrorResponse;
pub mod health_response;
pub use self::health_response::HealthResponse;
pub mod source;
pub use self::source::Source;
pub mod stores_response;
pub use self::stores_response::StoresResponse;
pub mod version_response;
pub use self::version_response::VersionResponse;
