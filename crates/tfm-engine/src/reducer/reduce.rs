//! Set reduction primitives.

use std::cmp::Ordering;

use tfm_core::{Framework, FxHashSet};

use super::FrameworkReducer;

impl FrameworkReducer {
    /// Keep one framework out of every group of equivalent ones.
    ///
    /// The input is ordered by equivalence precedence, portables last, then
    /// identifier with the highest version first. Each kept framework
    /// suppresses everything reachable from it through equivalence edges.
    /// Portables are equivalent when their member sets consume each other.
    pub fn reduce(&self, frameworks: &[Framework]) -> Vec<Framework> {
        let mut sorted = dedupe(frameworks);
        sorted.sort_by(|a, b| self.equivalence_order(a, b));

        let mut suppressed: FxHashSet<Framework> = FxHashSet::default();
        let mut kept: Vec<Framework> = Vec::with_capacity(sorted.len());
        for framework in sorted {
            if suppressed.contains(&framework) {
                continue;
            }
            if framework.is_portable() {
                if kept
                    .iter()
                    .any(|other| other.is_portable() && self.mutually_compatible(other, &framework))
                {
                    continue;
                }
            } else {
                suppressed.extend(self.equivalence_closure(&framework));
            }
            kept.push(framework);
        }

        tracing::trace!(kept = kept.len(), "reduced equivalent frameworks");
        kept
    }

    fn equivalence_order(&self, a: &Framework, b: &Framework) -> Ordering {
        let rank = |f: &Framework| {
            self.mappings
                .equivalent_precedence(f.identifier())
                .unwrap_or(usize::MAX)
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.is_portable().cmp(&b.is_portable()))
            .then_with(|| {
                a.identifier()
                    .to_ascii_lowercase()
                    .cmp(&b.identifier().to_ascii_lowercase())
            })
            .then_with(|| b.version().cmp(&a.version()))
            .then_with(|| a.canonical_cmp(b))
    }

    /// Every framework reachable from `start` through provider equivalence
    /// edges, `start` excluded.
    fn equivalence_closure(&self, start: &Framework) -> FxHashSet<Framework> {
        let mut reached = FxHashSet::default();
        let mut stack = vec![start.clone()];
        while let Some(node) = stack.pop() {
            for next in self.mappings.equivalent_frameworks(&node).unwrap_or_default() {
                if next != *start && reached.insert(next.clone()) {
                    stack.push(next);
                }
            }
        }
        reached
    }

    fn mutually_compatible(&self, a: &Framework, b: &Framework) -> bool {
        self.compat.is_compatible(a, b) && self.compat.is_compatible(b, a)
    }

    /// Keep the highest frameworks: drop any framework that another member
    /// can consume without the reverse also holding.
    pub fn reduce_upwards(&self, frameworks: &[Framework]) -> Vec<Framework> {
        self.reduce_dominated(frameworks, |higher, lower| {
            self.compat.is_compatible(higher, lower)
        })
    }

    /// Mirror of [`FrameworkReducer::reduce_upwards`]: keep the lowest.
    pub fn reduce_downwards(&self, frameworks: &[Framework]) -> Vec<Framework> {
        self.reduce_dominated(frameworks, |lower, higher| {
            self.compat.is_compatible(higher, lower)
        })
    }

    /// `dominates(y, x)` means `y` should survive over `x`. Mutual ties are
    /// kept, except that a same-name zero-version framework yields to its
    /// versioned twin. `Any` only survives alone.
    fn reduce_dominated(
        &self,
        frameworks: &[Framework],
        dominates: impl Fn(&Framework, &Framework) -> bool,
    ) -> Vec<Framework> {
        let mut input = dedupe(frameworks);
        if input.len() > 1 {
            input.retain(|f| !f.is_any());
        }

        let keep: Vec<bool> = input
            .iter()
            .enumerate()
            .map(|(i, x)| {
                !input.iter().enumerate().any(|(j, y)| {
                    if i == j {
                        return false;
                    }
                    let y_over_x = dominates(y, x);
                    if !y_over_x {
                        return false;
                    }
                    let x_over_y = dominates(x, y);
                    !x_over_y
                        || (x.name_eq(y) && x.version().is_empty() && !y.version().is_empty())
                })
            })
            .collect();

        let survivors: Vec<Framework> = input
            .into_iter()
            .zip(keep)
            .filter_map(|(framework, keep)| keep.then_some(framework))
            .collect();
        tracing::trace!(survivors = survivors.len(), "reduced framework set");
        survivors
    }
}

/// Remove full duplicates, keeping first occurrences.
fn dedupe(frameworks: &[Framework]) -> Vec<Framework> {
    let mut seen = FxHashSet::default();
    frameworks
        .iter()
        .filter(|f| seen.insert(*f))
        .cloned()
        .collect()
}
