use std::collections::BTreeMap;

use crate::model::UserRecord;

/// Group users by workgroup, keeping input order within each group.
///
/// Callers are expected to have dropped records with a non-positive
/// workgroup id beforehand (see [`crate::parser::validity`]).
pub fn group_by_workgroup(users: &[UserRecord]) -> BTreeMap<i64, Vec<&UserRecord>> {
    let mut by_workgroup: BTreeMap<i64, Vec<&UserRecord>> = BTreeMap::new();
    for user in users {
        by_workgroup.entry(user.workgroup_id).or_default().push(user);
    }
    by_workgroup
}
