pub mod errors;
pub mod id;

pub use errors::{ConfigError, PalaverError};
pub use id::SessionId;

pub type Result<T> = std::result::Result<T, PalaverError>;
