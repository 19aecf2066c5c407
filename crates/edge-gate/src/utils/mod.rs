pub mod error;
pub mod response;

pub use error::GateError;
pub use response::found;
