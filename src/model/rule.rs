use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::filter::{Clause, Combination};
use crate::model::grant::Grant;

/// The `(workforce, workgroup)` pair a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkgroupScope {
    /// Workforce identifier.
    pub workforce_id: i64,
    /// Workgroup identifier.
    pub workgroup_id: i64,
}

/// An access rule: users in scope who satisfy `condition` receive every
/// permission set in `granted_permission_set_ids` within `case_pool_id`.
///
/// The condition is a conjunction of clauses, each clause a disjunction of
/// filters. An empty condition is satisfied by every user in scope. Several
/// rules may cover the same grant; a user holds it if any of them matches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Identifier, stable within one concentration pass only.
    pub rule_id: u64,
    /// Workforce the rule applies to.
    pub workforce_id: i64,
    /// Workgroup the rule applies to.
    pub workgroup_id: i64,
    /// Case pool the granted permission sets belong to.
    pub case_pool_id: i64,
    /// Permission sets granted when the rule matches.
    pub granted_permission_set_ids: BTreeSet<i64>,
    /// Conjunction of disjunctive clauses.
    pub condition: Vec<Clause>,
}

impl Rule {
    /// A rule with an empty condition. The id is assigned later.
    pub fn unconditional(
        scope: WorkgroupScope,
        case_pool_id: i64,
        permission_set_ids: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            rule_id: 0,
            workforce_id: scope.workforce_id,
            workgroup_id: scope.workgroup_id,
            case_pool_id,
            granted_permission_set_ids: permission_set_ids.into_iter().collect(),
            condition: Vec::new(),
        }
    }

    /// A rule granting exactly `grant`, conditioned on every filter in
    /// `combination` (one singleton clause per filter).
    pub fn conjunction(
        rule_id: u64,
        scope: WorkgroupScope,
        grant: Grant,
        combination: &Combination,
    ) -> Self {
        Self {
            rule_id,
            workforce_id: scope.workforce_id,
            workgroup_id: scope.workgroup_id,
            case_pool_id: grant.case_pool_id,
            granted_permission_set_ids: BTreeSet::from([grant.permission_set_id]),
            condition: combination
                .iter()
                .map(|filter| Clause::from([*filter]))
                .collect(),
        }
    }

    /// The same rule under a different id.
    pub fn with_rule_id(mut self, rule_id: u64) -> Self {
        self.rule_id = rule_id;
        self
    }

    /// `(workforce, workgroup)` pair of the rule.
    pub fn scope(&self) -> WorkgroupScope {
        WorkgroupScope {
            workforce_id: self.workforce_id,
            workgroup_id: self.workgroup_id,
        }
    }

    /// True when the condition is empty.
    pub fn is_unconditional(&self) -> bool {
        self.condition.is_empty()
    }

    /// Every grant this rule hands out when it matches.
    pub fn grants(&self) -> impl Iterator<Item = Grant> + '_ {
        self.granted_permission_set_ids
            .iter()
            .map(|ps| Grant::new(self.case_pool_id, *ps))
    }

    /// Render the condition as text, e.g. `role:1 AND (skill:2 OR skill:3)`.
    ///
    /// Unconditional rules render as the empty string. An empty clause, which
    /// no user can satisfy, renders as `()`.
    pub fn render_condition(&self) -> String {
        let mut out = String::new();
        for (idx, clause) in self.condition.iter().enumerate() {
            if idx > 0 {
                out.push_str(" AND ");
            }
            let parenthesize = clause.len() != 1;
            if parenthesize {
                out.push('(');
            }
            for (pos, filter) in clause.iter().enumerate() {
                if pos > 0 {
                    out.push_str(" OR ");
                }
                out.push_str(&filter.to_string());
            }
            if parenthesize {
                out.push(')');
            }
        }
        out
    }
}
