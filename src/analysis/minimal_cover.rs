//! Minimal-cover reduction of the combinations observed for one grant.
//!
//! A combination that is a superset of another is a strictly more specific
//! sufficient condition and adds nothing once the more general one is known
//! to suffice. Reduction keeps exactly the inclusion-minimal combinations,
//! so the result is an antichain and does not depend on input order.

use std::collections::BTreeSet;

use crate::model::Combination;

/// Reduce `combinations` to its inclusion-minimal members.
///
/// Runs in O(n²) subset checks and never fails. Duplicates collapse to one
/// copy.
pub fn reduce<I>(combinations: I) -> BTreeSet<Combination>
where
    I: IntoIterator<Item = Combination>,
{
    let mut accumulator: Vec<Combination> = Vec::new();

    for candidate in combinations {
        let has_dominators = accumulator
            .iter()
            .any(|member| member.is_superset(&candidate));
        let dominated = accumulator
            .iter()
            .any(|member| candidate.is_superset(member));

        if has_dominators || !dominated {
            accumulator.retain(|member| !member.is_superset(&candidate));
            accumulator.push(candidate);
        }
    }

    accumulator.into_iter().collect()
}

/// True when no member is a proper subset of another.
pub fn is_antichain(combinations: &BTreeSet<Combination>) -> bool {
    combinations.iter().all(|a| {
        combinations
            .iter()
            .all(|b| a == b || !(a.is_subset(b) || b.is_subset(a)))
    })
}
