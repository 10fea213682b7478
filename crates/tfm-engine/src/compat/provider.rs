//! CompatibilityProvider: can a project built for one framework consume
//! assets built for another?

use std::sync::Arc;

use tfm_core::config::CompatConfig;
use tfm_core::{Framework, FrameworkMappingProvider, FrameworkVersion};

use super::cache::CompatCache;
use crate::expander::FrameworkExpander;
use crate::mappings::DefaultMappingProvider;

/// The compatibility oracle. Verdicts are memoized per ordered pair for the
/// life of the provider.
pub struct CompatibilityProvider {
    mappings: Arc<dyn FrameworkMappingProvider>,
    expander: FrameworkExpander,
    cache: CompatCache,
}

impl CompatibilityProvider {
    pub fn new(mappings: Arc<dyn FrameworkMappingProvider>, config: &CompatConfig) -> Self {
        Self {
            expander: FrameworkExpander::new(Arc::clone(&mappings)),
            mappings,
            cache: CompatCache::new(config.effective_cache_capacity()),
        }
    }

    /// Oracle over the built-in mappings with an unbounded cache.
    pub fn with_defaults() -> Self {
        Self::new(DefaultMappingProvider::shared(), &CompatConfig::default())
    }

    pub fn mappings(&self) -> &Arc<dyn FrameworkMappingProvider> {
        &self.mappings
    }

    pub fn expander(&self) -> &FrameworkExpander {
        &self.expander
    }

    /// True if a project targeting `project` can use assets built for
    /// `available`. Not symmetric.
    pub fn is_compatible(&self, project: &Framework, available: &Framework) -> bool {
        if project == available {
            return true;
        }
        self.cache.get_or_compute(project, available, || {
            let verdict = self.is_compatible_core(project, available);
            tracing::debug!(%project, %available, verdict, "compatibility computed");
            verdict
        })
    }

    /// Number of memoized pairs.
    pub fn cache_len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn is_compatible_core(&self, project: &Framework, available: &Framework) -> bool {
        if !project.is_specific() || !available.is_specific() {
            if let Some(verdict) = special_case(project, available) {
                return verdict;
            }
        }

        if available.is_portable() {
            return self.is_portable_compatible(project, available);
        }

        std::iter::once(project.clone())
            .chain(self.expander.expand(project))
            .any(|candidate| is_regular_match(&candidate, available))
    }

    /// Every required member of the project must be satisfied by some member
    /// of the available profile, optional members included.
    fn is_portable_compatible(&self, project: &Framework, available: &Framework) -> bool {
        let project_members = if project.is_portable() {
            match self.mappings.portable_members(project.profile(), false) {
                Some(members) => members,
                None => return false,
            }
        } else {
            vec![project.clone()]
        };

        let Some(available_members) = self.mappings.portable_members(available.profile(), true)
        else {
            return false;
        };

        if project_members.len() > available_members.len() {
            return false;
        }

        project_members.iter().all(|member| {
            available_members
                .iter()
                .any(|candidate| self.is_compatible(member, candidate))
        })
    }
}

/// Verdicts that hold whenever a sentinel is involved. `None` falls through
/// to the regular rules.
fn special_case(project: &Framework, available: &Framework) -> Option<bool> {
    if project.is_any() || available.is_any() {
        return Some(true);
    }
    if project.is_unsupported() {
        return Some(false);
    }
    if available.is_agnostic() {
        return Some(true);
    }
    if available.is_unsupported() {
        return Some(false);
    }
    None
}

fn is_regular_match(candidate: &Framework, available: &Framework) -> bool {
    if !candidate.name_eq(available)
        || !candidate.profile().eq_ignore_ascii_case(available.profile())
        || !meets_floor(available.version(), candidate.version())
    {
        return false;
    }

    !available.is_platform_specific()
        || (candidate.platform().eq_ignore_ascii_case(available.platform())
            && meets_floor(available.platform_version(), candidate.platform_version()))
}

/// An empty floor is always met.
fn meets_floor(floor: FrameworkVersion, version: FrameworkVersion) -> bool {
    floor.is_empty() || floor <= version
}
