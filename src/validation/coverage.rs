use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Grant, UserRecord};

/// Outcome of replaying a rule set against ground truth.
///
/// Behavioral coverage (`coverage_ratio`) asks whether each user ends up with
/// exactly their real grants. Structural coverage
/// (`structurally_uncovered_grants`) only asks whether any rule mentions a
/// grant at all. A user may be both under- and over-granted when the errors
/// concern different grants.
#[derive(Debug, Clone)]
pub struct ValidationReport<'a> {
    /// Share of users whose assigned grants equal their real grants, in `[0, 1]`.
    pub coverage_ratio: f64,
    /// Number of ground-truth users validated.
    pub population: usize,
    /// Number of rules replayed.
    pub rule_count: usize,
    /// Users missing at least one real grant.
    pub users_under_granted: BTreeSet<&'a UserRecord>,
    /// Users assigned at least one grant they do not hold.
    pub users_over_granted: BTreeSet<&'a UserRecord>,
    /// Real grants no rule mentions.
    pub structurally_uncovered_grants: BTreeSet<Grant>,
    /// Grants the rule set assigns to each user.
    pub assigned_grants_by_user: BTreeMap<&'a UserRecord, BTreeSet<Grant>>,
}

impl ValidationReport<'_> {
    /// `coverage_ratio` as a percentage.
    pub fn coverage_percent(&self) -> f64 {
        self.coverage_ratio * 100.0
    }

    /// True when every user is reproduced exactly.
    pub fn is_exact(&self) -> bool {
        self.users_under_granted.is_empty() && self.users_over_granted.is_empty()
    }

    /// Real grants of `user` the rules failed to assign.
    pub fn missing_grants(&self, user: &UserRecord) -> BTreeSet<Grant> {
        match self.assigned_grants_by_user.get(user) {
            Some(assigned) => user.grants.difference(assigned).copied().collect(),
            None => user.grants.clone(),
        }
    }

    /// Grants assigned to `user` that they do not actually hold.
    pub fn excess_grants(&self, user: &UserRecord) -> BTreeSet<Grant> {
        self.assigned_grants_by_user
            .get(user)
            .map(|assigned| assigned.difference(&user.grants).copied().collect())
            .unwrap_or_default()
    }
}
