//! Configuration loading errors.

use super::error_code::{self, TfmErrorCode};
use super::FrameworkError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid mapping '{entry}': {reason}")]
    InvalidMapping { entry: String, reason: String },

    #[error("framework error: {0}")]
    Framework(#[from] FrameworkError),
}

impl TfmErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::InvalidMapping { .. } => error_code::CONFIG_INVALID_MAPPING,
            Self::Framework(e) => e.error_code(),
        }
    }
}
