//! FrameworkReducer: nearest-match selection and set reduction.

mod nearest;
mod portable;
mod reduce;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tfm_core::config::ReducerConfig;
use tfm_core::{ConfigError, FrameworkMappingProvider, TfmConfig};

use crate::compat::CompatibilityProvider;
use crate::mappings::DefaultMappingProvider;

/// Picks the nearest compatible framework out of a candidate set.
pub struct FrameworkReducer {
    compat: Arc<CompatibilityProvider>,
    mappings: Arc<dyn FrameworkMappingProvider>,
    log_ambiguous: bool,
    ambiguous: AtomicU64,
}

impl FrameworkReducer {
    pub fn new(compat: Arc<CompatibilityProvider>, config: &ReducerConfig) -> Self {
        Self {
            mappings: Arc::clone(compat.mappings()),
            compat,
            log_ambiguous: config.effective_log_ambiguous(),
            ambiguous: AtomicU64::new(0),
        }
    }

    /// Reducer over the built-in mappings.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(CompatibilityProvider::with_defaults()),
            &ReducerConfig::default(),
        )
    }

    /// Build the whole engine from config: built-in mappings merged with
    /// `config.mappings`, then the oracle, then the reducer.
    pub fn from_config(config: &TfmConfig) -> Result<Self, ConfigError> {
        let mappings: Arc<dyn FrameworkMappingProvider> = if config.mappings.is_empty() {
            DefaultMappingProvider::shared()
        } else {
            Arc::new(DefaultMappingProvider::with_extra(&config.mappings)?)
        };
        let compat = Arc::new(CompatibilityProvider::new(mappings, &config.compat));
        Ok(Self::new(compat, &config.reducer))
    }

    pub fn compat(&self) -> &Arc<CompatibilityProvider> {
        &self.compat
    }

    /// How many nearest-match calls fell back to the fixed precedence order
    /// because reduction left more than one candidate.
    pub fn ambiguous_resolutions(&self) -> u64 {
        self.ambiguous.load(Ordering::Relaxed)
    }

    fn record_ambiguous(&self) {
        self.ambiguous.fetch_add(1, Ordering::Relaxed);
    }
}
