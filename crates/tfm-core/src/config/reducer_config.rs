//! Framework reducer configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReducerConfig {
    /// Log a warning when nearest-match falls back to the fixed ordering.
    /// Default: true.
    pub log_ambiguous: Option<bool>,
}

impl ReducerConfig {
    pub fn effective_log_ambiguous(&self) -> bool {
        self.log_ambiguous.unwrap_or(true)
    }
}
