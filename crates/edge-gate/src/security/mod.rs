pub mod headers;
pub mod middleware;

pub use headers::security_headers;
pub use middleware::require_auth;
