//! Stable error codes exposed to hosts.

pub const INVALID_RANGE: &str = "FRAMEWORK_INVALID_RANGE";
pub const INVALID_VERSION: &str = "FRAMEWORK_INVALID_VERSION";
pub const INVALID_FOLDER_NAME: &str = "FRAMEWORK_INVALID_FOLDER_NAME";
pub const INVALID_PORTABLE_PROFILE: &str = "FRAMEWORK_INVALID_PORTABLE_PROFILE";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID_MAPPING: &str = "CONFIG_INVALID_MAPPING";

/// Every error type in the workspace maps to a stable string code.
pub trait TfmErrorCode {
    fn error_code(&self) -> &'static str;
}
