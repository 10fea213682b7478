//! Portable arbitration for candidate sets that are entirely portable.

use std::cmp::Ordering;

use tfm_core::Framework;

use super::FrameworkReducer;

impl FrameworkReducer {
    /// Narrow an all-portable candidate set to a single winner.
    ///
    /// A portable target lets each of its members vote for the candidates
    /// holding that member's nearest match. A non-portable target keeps the
    /// candidates holding its own nearest match among all members. Remaining
    /// ties go to [`FrameworkReducer::compare_portables`].
    pub(super) fn arbitrate_portables(
        &self,
        target: &Framework,
        candidates: Vec<Framework>,
    ) -> Vec<Framework> {
        let exploded: Vec<(Framework, Vec<Framework>)> = candidates
            .into_iter()
            .map(|candidate| {
                let members = self.explode(&candidate, true);
                (candidate, members)
            })
            .collect();

        let mut pool: Vec<Framework> = Vec::new();
        for member in exploded.iter().flat_map(|(_, members)| members) {
            if !pool.contains(member) {
                pool.push(member.clone());
            }
        }

        let mut winners: Vec<Framework> = if target.is_portable() {
            let mut votes = vec![0usize; exploded.len()];
            for member in self.explode(target, false) {
                let Some(nearest) = self.get_nearest(&member, &pool) else {
                    continue;
                };
                for (count, (_, members)) in votes.iter_mut().zip(&exploded) {
                    if members.contains(&nearest) {
                        *count += 1;
                    }
                }
            }
            let best = votes.iter().copied().max().unwrap_or(0);
            exploded
                .into_iter()
                .zip(votes)
                .filter(|(_, count)| *count == best)
                .map(|((candidate, _), _)| candidate)
                .collect()
        } else {
            match self.get_nearest(target, &pool) {
                Some(nearest) => exploded
                    .into_iter()
                    .filter(|(_, members)| members.contains(&nearest))
                    .map(|(candidate, _)| candidate)
                    .collect(),
                None => exploded.into_iter().map(|(candidate, _)| candidate).collect(),
            }
        };

        if winners.len() > 1 {
            winners.sort_by(|a, b| self.compare_portables(a, b));
            winners.truncate(1);
        }
        winners
    }

    /// Member frameworks of a portable framework, or the framework itself.
    fn explode(&self, framework: &Framework, include_optional: bool) -> Vec<Framework> {
        if !framework.is_portable() {
            return vec![framework.clone()];
        }
        self.mappings
            .portable_members(framework.profile(), include_optional)
            .unwrap_or_default()
    }

    /// Better portable first: fewer required members, then single-member
    /// profiles, then shorter profile strings, then profile text ignoring case.
    fn compare_portables(&self, a: &Framework, b: &Framework) -> Ordering {
        let required = |f: &Framework| self.explode(f, false).len();
        required(a)
            .cmp(&required(b))
            .then_with(|| a.has_member_separator().cmp(&b.has_member_separator()))
            .then_with(|| a.profile().len().cmp(&b.profile().len()))
            .then_with(|| {
                a.profile()
                    .to_ascii_lowercase()
                    .cmp(&b.profile().to_ascii_lowercase())
            })
            .then_with(|| a.canonical_cmp(b))
    }
}
