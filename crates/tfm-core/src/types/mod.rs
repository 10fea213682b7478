pub mod collections;
pub mod framework;
pub mod range;
pub mod version;

pub use framework::Framework;
pub use range::{CompatibilityMapping, FrameworkRange};
pub use version::FrameworkVersion;
