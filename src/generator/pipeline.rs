//! End-to-end rule synthesis over one population.
//!
//! Stages run strictly in order: group by workgroup, extract common grants,
//! collect combinations for the remaining grants, reduce each to its minimal
//! cover, synthesize conjunction rules, then concentrate the whole candidate
//! set. No stage mutates another stage's output; the only mutable state is the
//! [`RuleIdGenerator`] owned by a single [`synthesize`] call.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::analysis::{combinations, common_grants, minimal_cover, workgroup};
use crate::error::Result;
use crate::generator::concentrator;
use crate::generator::rule_ids::RuleIdGenerator;
use crate::generator::synthesizer;
use crate::model::{Grant, Rule, UserRecord};

/// Result of one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    /// Concentrated rules, ids contiguous from 0.
    pub rules: Vec<Rule>,
    /// Rule count before concentration.
    pub candidate_count: usize,
    /// Number of workgroups processed.
    pub workgroup_count: usize,
}

/// Infer a concentrated rule set reproducing the grants of `users`.
///
/// Users must already have passed the validity filter. Core errors propagate
/// unchanged; the caller decides whether to abort or skip.
pub fn synthesize(users: &[UserRecord]) -> Result<SynthesisOutcome> {
    let mut ids = RuleIdGenerator::new();
    let groups = workgroup::group_by_workgroup(users);
    let mut candidates: Vec<Rule> = Vec::new();

    for (workgroup_id, members) in &groups {
        let common_rules = common_grants::common_grant_rules(members)?;
        let covered: BTreeSet<Grant> = common_rules
            .iter()
            .flat_map(|rule| rule.grants())
            .collect();
        let common_count = common_rules.len();
        candidates.extend(
            common_rules
                .into_iter()
                .map(|rule| rule.with_rule_id(ids.next_id())),
        );

        let Some(first) = members.first() else {
            continue;
        };
        let scope = first.scope();
        let mut conditional_count = 0usize;

        for (grant, observed) in combinations::collect_combinations(members) {
            if covered.contains(&grant) {
                continue;
            }
            let antichain = minimal_cover::reduce(observed);
            debug_assert!(minimal_cover::is_antichain(&antichain));
            let rules = synthesizer::synthesize_rules(grant, &antichain, scope, &mut ids);
            conditional_count += rules.len();
            candidates.extend(rules);
        }

        debug!(
            workgroup_id,
            users = members.len(),
            common_rules = common_count,
            conditional_rules = conditional_count,
            "synthesized workgroup candidates"
        );
    }

    let candidate_count = candidates.len();
    let rules = concentrator::concentrate(&candidates, &mut ids)?;

    info!(
        workgroups = groups.len(),
        candidates = candidate_count,
        rules = rules.len(),
        "rule synthesis complete"
    );

    Ok(SynthesisOutcome {
        rules,
        candidate_count,
        workgroup_count: groups.len(),
    })
}
