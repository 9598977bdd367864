use std::collections::{BTreeMap, BTreeSet};

use crate::model::{AttributeFilter, AttributeFilterKind, Combination, Grant, UserRecord};

/// Every attribute a user holds, tagged by kind. Duplicate ids collapse.
pub fn combination_of(user: &UserRecord) -> Combination {
    [
        AttributeFilterKind::Role,
        AttributeFilterKind::Skill,
        AttributeFilterKind::RoleSkill,
    ]
    .into_iter()
    .flat_map(|kind| {
        user.attribute_ids(kind)
            .iter()
            .map(move |id| AttributeFilter { kind, id: *id })
    })
    .collect()
}

/// For each grant held in the workgroup, the distinct combinations of the
/// users holding it.
///
/// Grants already covered by a common-grant rule are not filtered here; the
/// pipeline skips them before reduction.
pub fn collect_combinations(users: &[&UserRecord]) -> BTreeMap<Grant, BTreeSet<Combination>> {
    let mut by_grant: BTreeMap<Grant, BTreeSet<Combination>> = BTreeMap::new();
    for user in users {
        let combination = combination_of(user);
        for grant in &user.grants {
            by_grant
                .entry(*grant)
                .or_default()
                .insert(combination.clone());
        }
    }
    by_grant
}
