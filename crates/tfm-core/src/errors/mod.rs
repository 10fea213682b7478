pub mod error_code;
mod config_error;
mod framework_error;

pub use config_error::ConfigError;
pub use framework_error::FrameworkError;

/// Convenience type alias.
pub type TfmResult<T> = Result<T, FrameworkError>;
