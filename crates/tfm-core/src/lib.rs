//! # tfm-core
//!
//! Foundation crate for the target framework compatibility engine.
//! Defines the framework descriptor types, the mapping provider trait,
//! errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TfmConfig;
pub use errors::error_code::TfmErrorCode;
pub use errors::{ConfigError, FrameworkError, TfmResult};
pub use traits::FrameworkMappingProvider;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::{CompatibilityMapping, Framework, FrameworkRange, FrameworkVersion};
