//! Additional mapping tables merged into the built-in ones.
//!
//! Frameworks are written as short folder names (`net45`, `win81`,
//! `portable-net45+win8`); the engine parses them when it builds the
//! mapping provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MappingsConfig {
    /// Pairs of frameworks that are fully interchangeable.
    pub equivalent: Vec<EquivalentPair>,
    /// Identifier subset relationships.
    pub subsets: Vec<SubsetPair>,
    /// One-way compatibility rules.
    pub compatibility: Vec<CompatibilityRule>,
    /// Identifiers appended to the precedence list, highest first.
    pub precedence: Vec<String>,
}

impl MappingsConfig {
    pub fn is_empty(&self) -> bool {
        self.equivalent.is_empty()
            && self.subsets.is_empty()
            && self.compatibility.is_empty()
            && self.precedence.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalentPair {
    pub left: String,
    pub right: String,
}

/// `subset` identifier is a subset of `superset`: a framework of the
/// superset family can consume assets of the subset family at the same
/// version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsetPair {
    pub subset: String,
    pub superset: String,
}

/// Every version of `target` and above can consume `supported` and every
/// version of the same family down to `supported_min`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub target: String,
    pub supported: String,
    /// Lower bound of the supported range. Default: version 0.0 of the
    /// supported family.
    #[serde(default)]
    pub supported_min: Option<String>,
}
