//! Tracing subscriber setup for hosts and tests.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

/// Install a global fmt subscriber.
///
/// The filter comes from `TFM_LOG` when set, otherwise from
/// `config.log_level`. Calling this more than once is harmless; only the
/// first subscriber wins.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(level = config.effective_log_level(), "tracing initialized");
    }
}
