//! FrameworkMappingProvider: the data source behind the compatibility engine.
//!
//! A pure lookup table. `None` (or an empty list) means no edges of that kind
//! exist for the key; it is never an error.

use crate::types::{Framework, FrameworkRange};

pub trait FrameworkMappingProvider: Send + Sync {
    /// Frameworks fully equivalent to `framework`, excluding itself.
    /// Includes profile-level equivalents (e.g. `net45-client` for `net45`).
    fn equivalent_frameworks(&self, framework: &Framework) -> Option<Vec<Framework>>;

    /// Equivalents of every known framework that falls inside `range`.
    fn equivalent_frameworks_in_range(&self, range: &FrameworkRange) -> Option<Vec<Framework>>;

    /// Identifiers that are subsets of `identifier`.
    fn subset_identifiers(&self, identifier: &str) -> Option<Vec<String>>;

    /// Supported ranges of every one-way compatibility mapping whose target
    /// range contains `framework`.
    fn compatibility_ranges(&self, framework: &Framework) -> Option<Vec<FrameworkRange>>;

    /// Ordered member frameworks of a portable profile string. Optional
    /// members are only listed when `include_optional` is set.
    fn portable_members(&self, profile: &str, include_optional: bool) -> Option<Vec<Framework>>;

    /// Rank of an identifier in the tie-break precedence list, lower first.
    fn precedence(&self, _identifier: &str) -> Option<usize> {
        None
    }

    /// Rank of an identifier when choosing which of several equivalent
    /// frameworks to keep, lower first.
    fn equivalent_precedence(&self, _identifier: &str) -> Option<usize> {
        None
    }
}
