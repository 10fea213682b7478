//! Compatibility oracle configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the compatibility oracle's result cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompatConfig {
    /// Maximum number of memoized (project, available) pairs.
    /// Default: unbounded. The descriptor space touched by one process is small.
    pub cache_capacity: Option<u64>,
}

impl CompatConfig {
    /// Returns the configured capacity, `None` meaning unbounded.
    pub fn effective_cache_capacity(&self) -> Option<u64> {
        self.cache_capacity.filter(|&c| c > 0)
    }
}
