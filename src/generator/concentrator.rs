use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::generator::rule_ids::RuleIdGenerator;
use crate::model::{Clause, Rule};

type BucketKey<'a> = (i64, i64, &'a [Clause]);

/// Merge rules sharing workgroup, case pool, and condition into one rule
/// granting the union of their permission sets.
///
/// `ids` is reset before numbering, so the output ids run from 0 to the bucket
/// count minus one in `(workgroup, case pool, condition)` order. Members of a
/// bucket that disagree on workforce yield [`Error::InconsistentScope`].
pub fn concentrate(candidates: &[Rule], ids: &mut RuleIdGenerator) -> Result<Vec<Rule>> {
    ids.reset();

    let mut buckets: BTreeMap<BucketKey<'_>, Vec<&Rule>> = BTreeMap::new();
    for rule in candidates {
        buckets
            .entry((rule.workgroup_id, rule.case_pool_id, rule.condition.as_slice()))
            .or_default()
            .push(rule);
    }

    let mut merged = Vec::with_capacity(buckets.len());
    for ((workgroup_id, case_pool_id, condition), members) in buckets {
        let Some(first) = members.first() else {
            continue;
        };
        if let Some(stray) = members
            .iter()
            .find(|member| member.workforce_id != first.workforce_id)
        {
            return Err(Error::InconsistentScope {
                workgroup_id,
                case_pool_id,
                detail: format!(
                    "workforce {} and {} share one bucket",
                    first.workforce_id, stray.workforce_id
                ),
            });
        }

        let granted_permission_set_ids: BTreeSet<i64> = members
            .iter()
            .flat_map(|member| member.granted_permission_set_ids.iter().copied())
            .collect();

        merged.push(Rule {
            rule_id: ids.next_id(),
            workforce_id: first.workforce_id,
            workgroup_id,
            case_pool_id,
            granted_permission_set_ids,
            condition: condition.to_vec(),
        });
    }

    Ok(merged)
}
