//! Errors raised while constructing or parsing framework descriptors.

use super::error_code::{self, TfmErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("invalid framework range: {min} .. {max} must share identifier, profile and platform")]
    InvalidRange { min: String, max: String },

    #[error("invalid framework version: '{input}'")]
    InvalidVersion { input: String },

    #[error("invalid framework folder name: '{input}'")]
    InvalidFolderName { input: String },

    #[error("invalid portable profile '{profile}': {reason}")]
    InvalidPortableProfile { profile: String, reason: String },
}

impl TfmErrorCode for FrameworkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => error_code::INVALID_RANGE,
            Self::InvalidVersion { .. } => error_code::INVALID_VERSION,
            Self::InvalidFolderName { .. } => error_code::INVALID_FOLDER_NAME,
            Self::InvalidPortableProfile { .. } => error_code::INVALID_PORTABLE_PROFILE,
        }
    }
}
