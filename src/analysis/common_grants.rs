use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::model::{Grant, Rule, UserRecord};

/// Grants held by every user in the workgroup.
///
/// An empty user list is a contract violation and yields
/// [`Error::EmptyWorkgroup`] rather than an empty set.
pub fn intersect_grants(users: &[&UserRecord]) -> Result<BTreeSet<Grant>> {
    let (first, rest) = users.split_first().ok_or(Error::EmptyWorkgroup)?;
    let mut common = first.grants.clone();
    for user in rest {
        if common.is_empty() {
            break;
        }
        common.retain(|grant| user.grants.contains(grant));
    }
    Ok(common)
}

/// One unconditional rule per case pool among the grants every workgroup
/// member holds.
///
/// Scope is copied from the first member; workforce is assumed uniform
/// within a workgroup. Rule ids are left at zero for the caller to assign.
pub fn common_grant_rules(users: &[&UserRecord]) -> Result<Vec<Rule>> {
    let common = intersect_grants(users)?;
    let Some(first) = users.first() else {
        return Err(Error::EmptyWorkgroup);
    };

    let mut by_case_pool: BTreeMap<i64, BTreeSet<i64>> = BTreeMap::new();
    for grant in common {
        by_case_pool
            .entry(grant.case_pool_id)
            .or_default()
            .insert(grant.permission_set_id);
    }

    let scope = first.scope();
    Ok(by_case_pool
        .into_iter()
        .map(|(case_pool_id, permission_sets)| {
            Rule::unconditional(scope, case_pool_id, permission_sets)
        })
        .collect())
}
