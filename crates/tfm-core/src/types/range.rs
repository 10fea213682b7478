//! Inclusive version ranges over a single framework family.

use serde::{Deserialize, Serialize};

use super::framework::Framework;
use crate::errors::FrameworkError;

/// An inclusive range `[min, max]` of versions of one identifier, profile
/// and platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct FrameworkRange {
    min: Framework,
    max: Framework,
}

#[derive(Deserialize)]
struct RawRange {
    min: Framework,
    max: Framework,
}

impl TryFrom<RawRange> for FrameworkRange {
    type Error = FrameworkError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        FrameworkRange::new(raw.min, raw.max)
    }
}

impl FrameworkRange {
    /// Fails unless both ends share identifier, profile and platform and
    /// `min.version <= max.version`.
    pub fn new(min: Framework, max: Framework) -> Result<Self, FrameworkError> {
        if !min.same_except_for_version(&max) || min.version() > max.version() {
            return Err(FrameworkError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// `[identifier@0.0, framework]` with the framework's profile and platform.
    pub fn up_to(framework: &Framework) -> Self {
        Self {
            min: framework.with_version(Default::default()),
            max: framework.clone(),
        }
    }

    pub fn min(&self) -> &Framework {
        &self.min
    }

    pub fn max(&self) -> &Framework {
        &self.max
    }

    pub fn identifier(&self) -> &str {
        self.min.identifier()
    }

    pub fn satisfies(&self, framework: &Framework) -> bool {
        self.min.same_except_for_version(framework)
            && self.min.version() <= framework.version()
            && framework.version() <= self.max.version()
    }
}

/// One-way compatibility: frameworks inside `target` can consume assets
/// built for frameworks inside `supported`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityMapping {
    pub target: FrameworkRange,
    pub supported: FrameworkRange,
}

impl CompatibilityMapping {
    pub fn new(target: FrameworkRange, supported: FrameworkRange) -> Self {
        Self { target, supported }
    }
}
