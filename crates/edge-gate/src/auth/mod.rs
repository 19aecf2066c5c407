pub mod credentials;

pub use credentials::{normalize_email, AllowList};
