use std::collections::BTreeSet;

use crate::generator::rule_ids::RuleIdGenerator;
use crate::model::{Combination, Grant, Rule, WorkgroupScope};

/// One pure-conjunction rule per combination in a grant's reduced antichain.
///
/// An empty antichain yields no rules.
pub fn synthesize_rules(
    grant: Grant,
    antichain: &BTreeSet<Combination>,
    scope: WorkgroupScope,
    ids: &mut RuleIdGenerator,
) -> Vec<Rule> {
    antichain
        .iter()
        .map(|combination| Rule::conjunction(ids.next_id(), scope, grant, combination))
        .collect()
}
