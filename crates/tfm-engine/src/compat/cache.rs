//! Compatibility result cache: Moka concurrent map keyed by the ordered
//! (project, available) pair.
//! Full descriptors are the key, so distinct pairs never share an entry.

use moka::sync::Cache;
use tfm_core::Framework;

type CacheKey = (Framework, Framework);

/// Memoized compatibility verdicts for one oracle.
pub struct CompatCache {
    inner: Cache<CacheKey, bool>,
}

impl CompatCache {
    /// Bounded when `capacity` is set, unbounded otherwise.
    pub fn new(capacity: Option<u64>) -> Self {
        let inner = match capacity {
            Some(capacity) => Cache::new(capacity),
            None => Cache::builder().build(),
        };
        Self { inner }
    }

    /// Return the cached verdict, computing and storing it on a miss.
    /// Concurrent misses on the same pair run `compute` once.
    pub fn get_or_compute(
        &self,
        project: &Framework,
        available: &Framework,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        self.inner
            .get_with((project.clone(), available.clone()), compute)
    }

    pub fn get(&self, project: &Framework, available: &Framework) -> Option<bool> {
        self.inner.get(&(project.clone(), available.clone()))
    }

    /// Returns the number of entries in the cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks();
    }
}

impl Default for CompatCache {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfm_core::constants::identifiers;
    use tfm_core::FrameworkVersion;

    fn net(major: u32, minor: u32) -> Framework {
        Framework::new(identifiers::NET, FrameworkVersion::from_major_minor(major, minor))
    }

    #[test]
    fn computes_once_per_ordered_pair() {
        let cache = CompatCache::default();
        let mut calls = 0;
        assert!(cache.get_or_compute(&net(4, 5), &net(4, 0), || {
            calls += 1;
            true
        }));
        assert!(cache.get_or_compute(&net(4, 5), &net(4, 0), || {
            calls += 1;
            false
        }));
        assert_eq!(calls, 1);
        assert_eq!(cache.get(&net(4, 0), &net(4, 5)), None);
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn clear_drops_every_verdict() {
        let cache = CompatCache::new(Some(16));
        cache.get_or_compute(&net(4, 5), &net(4, 0), || true);
        cache.clear();
        assert_eq!(cache.get(&net(4, 5), &net(4, 0)), None);
    }
}
