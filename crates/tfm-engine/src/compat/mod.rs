pub mod cache;
pub mod provider;

pub use cache::CompatCache;
pub use provider::CompatibilityProvider;
