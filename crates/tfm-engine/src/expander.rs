//! Framework expansion: every framework reachable from a descriptor through
//! equivalence, subset and one-way compatibility edges.

use std::sync::Arc;

use smallvec::SmallVec;
use tfm_core::{Framework, FrameworkMappingProvider, FrameworkRange, FxHashSet};

/// Edges discovered from a single node. Most nodes have only a few.
type Edges = SmallVec<[Framework; 8]>;

/// Walks the mapping provider's edges from a starting framework.
#[derive(Clone)]
pub struct FrameworkExpander {
    mappings: Arc<dyn FrameworkMappingProvider>,
}

impl FrameworkExpander {
    pub fn new(mappings: Arc<dyn FrameworkMappingProvider>) -> Self {
        Self { mappings }
    }

    /// Lazily yield every framework reachable from `framework`, excluding
    /// `framework` itself, each exactly once.
    ///
    /// Traversal is depth-first over an explicit stack, so the order is fixed
    /// for a given provider and cycles in the provider's data terminate.
    pub fn expand(&self, framework: &Framework) -> Expansion<'_> {
        let mut seen = FxHashSet::default();
        seen.insert(framework.clone());
        Expansion {
            mappings: self.mappings.as_ref(),
            stack: vec![framework.clone()],
            seen,
            ready: Edges::new().into_iter(),
        }
    }
}

/// Iterator returned by [`FrameworkExpander::expand`].
pub struct Expansion<'a> {
    mappings: &'a dyn FrameworkMappingProvider,
    stack: Vec<Framework>,
    seen: FxHashSet<Framework>,
    ready: smallvec::IntoIter<[Framework; 8]>,
}

impl Iterator for Expansion<'_> {
    type Item = Framework;

    fn next(&mut self) -> Option<Framework> {
        loop {
            if let Some(next) = self.ready.next() {
                return Some(next);
            }

            let node = self.stack.pop()?;
            let mut fresh = Edges::new();
            for edge in edges(self.mappings, &node) {
                if self.seen.insert(edge.clone()) {
                    self.stack.push(edge.clone());
                    fresh.push(edge);
                }
            }
            tracing::trace!(framework = %node, discovered = fresh.len(), "expanded framework");
            self.ready = fresh.into_iter();
        }
    }
}

/// Direct equivalents, equivalents of `[identifier@0.0, node]`, subset
/// identifier clones (profile-less nodes only), then compatibility range
/// bounds.
fn edges(mappings: &dyn FrameworkMappingProvider, node: &Framework) -> Edges {
    let mut out = Edges::new();

    if let Some(equivalents) = mappings.equivalent_frameworks(node) {
        out.extend(equivalents);
    }

    if let Some(equivalents) = mappings.equivalent_frameworks_in_range(&FrameworkRange::up_to(node)) {
        out.extend(equivalents);
    }

    if !node.has_profile() {
        if let Some(subsets) = mappings.subset_identifiers(node.identifier()) {
            out.extend(subsets.into_iter().map(|subset| node.with_identifier(subset)));
        }
    }

    if let Some(ranges) = mappings.compatibility_ranges(node) {
        for range in ranges {
            out.push(range.min().clone());
            if range.min() != range.max() {
                out.push(range.max().clone());
            }
        }
    }

    out
}
