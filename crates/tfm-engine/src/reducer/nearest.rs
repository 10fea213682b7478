//! Nearest-match selection.

use tfm_core::Framework;

use super::FrameworkReducer;

impl FrameworkReducer {
    /// The single candidate nearest to `target`, or `None` when no
    /// candidate is compatible.
    ///
    /// Steps, in order:
    /// 1. drop `Unsupported` unless it is the only candidate
    /// 2. return an exact match immediately
    /// 3. keep candidates `target` can consume
    /// 4. drop candidates dominated by another survivor
    /// 5. prefer candidates sharing the target's identifier
    /// 6. portable arbitration
    /// 7. profile arbitration
    /// 8. a single survivor wins
    /// 9. otherwise fall back to precedence, then descending canonical order
    pub fn get_nearest(&self, target: &Framework, candidates: &[Framework]) -> Option<Framework> {
        let mut remaining: Vec<Framework> = candidates.to_vec();

        if remaining.iter().any(|c| !c.is_unsupported()) {
            remaining.retain(|c| !c.is_unsupported());
        }

        if let Some(exact) = remaining.iter().find(|c| *c == target) {
            return Some(exact.clone());
        }

        remaining.retain(|c| self.compat.is_compatible(target, c));
        let mut remaining = self.reduce_upwards(&remaining);

        if remaining.len() > 1 {
            narrow(&mut remaining, |c| c.name_eq(target));
        }

        if remaining.len() > 1 && remaining.iter().any(Framework::is_portable) {
            if remaining.iter().all(Framework::is_portable) {
                remaining = self.arbitrate_portables(target, remaining);
            } else {
                remaining.retain(|c| !c.is_portable());
            }
        }

        if remaining.len() > 1 && !remaining.iter().any(Framework::is_portable) {
            if target.has_profile() {
                narrow(&mut remaining, |c| {
                    c.name_eq(target) && c.profile().eq_ignore_ascii_case(target.profile())
                });
            }
            if remaining.iter().any(Framework::has_profile)
                && remaining.iter().any(|c| !c.has_profile())
            {
                remaining.retain(|c| !c.has_profile());
            }
        }

        tracing::debug!(
            framework = %target,
            candidates = candidates.len(),
            survivors = remaining.len(),
            "nearest framework reduction finished"
        );

        if remaining.len() > 1 {
            return self.resolve_ambiguous(target, remaining);
        }
        remaining.pop()
    }

    /// Several candidates survived every step. Order by provider precedence
    /// (unranked last), then by descending canonical order, and take the first.
    fn resolve_ambiguous(&self, target: &Framework, mut remaining: Vec<Framework>) -> Option<Framework> {
        let rank = |f: &Framework| self.mappings.precedence(f.identifier()).unwrap_or(usize::MAX);
        remaining.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| b.canonical_cmp(a)));

        self.record_ambiguous();
        if self.log_ambiguous {
            let names: Vec<String> = remaining.iter().map(ToString::to_string).collect();
            tracing::warn!(
                framework = %target,
                candidates = ?names,
                chosen = %remaining[0],
                "ambiguous nearest framework, falling back to precedence order"
            );
        }

        remaining.into_iter().next()
    }
}

/// Keep only matching elements, unless none match.
fn narrow(frameworks: &mut Vec<Framework>, keep: impl Fn(&Framework) -> bool) {
    if frameworks.iter().any(&keep) {
        frameworks.retain(|f| keep(f));
    }
}
