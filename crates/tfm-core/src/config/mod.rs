pub mod compat_config;
pub mod mappings_config;
pub mod observability_config;
pub mod reducer_config;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use compat_config::CompatConfig;
pub use mappings_config::{CompatibilityRule, EquivalentPair, MappingsConfig, SubsetPair};
pub use observability_config::ObservabilityConfig;
pub use reducer_config::ReducerConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TfmConfig {
    pub compat: CompatConfig,
    pub reducer: ReducerConfig,
    pub mappings: MappingsConfig,
    pub observability: ObservabilityConfig,
}

impl TfmConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}
