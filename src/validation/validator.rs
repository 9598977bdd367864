use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{AttributeFilter, AttributeFilterKind, Clause, Grant, Rule, UserRecord};
use crate::validation::coverage::ValidationReport;

/// How `RoleSkill` filters are evaluated against a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSkillMatching {
    /// Match the id against the user's role-skill ids.
    #[default]
    Dedicated,
    /// Never satisfied, reproducing extracts scored without a role-skill lookup.
    Never,
}

impl fmt::Display for RoleSkillMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleSkillMatching::Dedicated => write!(f, "dedicated"),
            RoleSkillMatching::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for RoleSkillMatching {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dedicated" => Ok(RoleSkillMatching::Dedicated),
            "never" => Ok(RoleSkillMatching::Never),
            _ => Err(format!("Invalid role-skill matching mode: {s}")),
        }
    }
}

/// Replays a rule set against a fixed ground-truth population.
#[derive(Debug, Clone)]
pub struct RuleValidator<'a> {
    population: &'a [UserRecord],
    role_skill_matching: RoleSkillMatching,
}

impl<'a> RuleValidator<'a> {
    /// Validator over `population` with [`RoleSkillMatching::Dedicated`].
    pub fn new(population: &'a [UserRecord]) -> Self {
        Self {
            population,
            role_skill_matching: RoleSkillMatching::default(),
        }
    }

    /// Choose how `RoleSkill` filters are evaluated.
    pub fn with_role_skill_matching(mut self, matching: RoleSkillMatching) -> Self {
        self.role_skill_matching = matching;
        self
    }

    /// Ground-truth users being validated against.
    pub fn population(&self) -> &'a [UserRecord] {
        self.population
    }

    /// Whether `user` holds the attribute named by `filter`.
    pub fn holds(&self, user: &UserRecord, filter: &AttributeFilter) -> bool {
        match filter.kind {
            AttributeFilterKind::Role | AttributeFilterKind::Skill => {
                user.attribute_ids(filter.kind).contains(&filter.id)
            }
            AttributeFilterKind::RoleSkill => match self.role_skill_matching {
                RoleSkillMatching::Dedicated => user.role_skill_ids.contains(&filter.id),
                RoleSkillMatching::Never => false,
            },
        }
    }

    /// Whether `rule` applies to `user`: same scope, and every clause has at
    /// least one filter the user holds.
    pub fn matches(&self, rule: &Rule, user: &UserRecord) -> bool {
        rule.scope() == user.scope()
            && rule
                .condition
                .iter()
                .all(|clause: &Clause| clause.iter().any(|filter| self.holds(user, filter)))
    }

    /// Grants the rule set would assign to `user`.
    pub fn assigned_grants(&self, rules: &[Rule], user: &UserRecord) -> BTreeSet<Grant> {
        rules
            .iter()
            .filter(|rule| self.matches(rule, user))
            .flat_map(|rule| rule.grants())
            .collect()
    }

    /// Score `rules` against the population.
    ///
    /// Coverage counts a user as correct only on exact equality between
    /// assigned and real grants. An empty population is an error because the
    /// ratio is undefined.
    pub fn validate(&self, rules: &[Rule]) -> Result<ValidationReport<'a>> {
        if self.population.is_empty() {
            return Err(Error::EmptyPopulation);
        }

        let mut assigned_grants_by_user = BTreeMap::new();
        let mut users_under_granted = BTreeSet::new();
        let mut users_over_granted = BTreeSet::new();
        let mut mismatched = 0usize;

        for user in self.population {
            let assigned = self.assigned_grants(rules, user);
            if assigned != user.grants {
                mismatched += 1;
                if !assigned.is_superset(&user.grants) {
                    users_under_granted.insert(user);
                }
                if !user.grants.is_superset(&assigned) {
                    users_over_granted.insert(user);
                }
            }
            assigned_grants_by_user.insert(user, assigned);
        }

        let mentioned: BTreeSet<Grant> = rules.iter().flat_map(|rule| rule.grants()).collect();
        let structurally_uncovered_grants: BTreeSet<Grant> = self
            .population
            .iter()
            .flat_map(|user| user.grants.iter().copied())
            .filter(|grant| !mentioned.contains(grant))
            .collect();

        let population = self.population.len();
        let coverage_ratio = (population - mismatched) as f64 / population as f64;

        debug!(
            population,
            mismatched,
            under_granted = users_under_granted.len(),
            over_granted = users_over_granted.len(),
            uncovered = structurally_uncovered_grants.len(),
            "validated rule set"
        );

        Ok(ValidationReport {
            coverage_ratio,
            population,
            rule_count: rules.len(),
            users_under_granted,
            users_over_granted,
            structurally_uncovered_grants,
            assigned_grants_by_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkgroupScope;

    const SCOPE: WorkgroupScope = WorkgroupScope {
        workforce_id: 1,
        workgroup_id: 10,
    };

    fn rule_with(condition: Vec<Clause>) -> Rule {
        let mut rule = Rule::unconditional(SCOPE, 12, [300]);
        rule.condition = condition;
        rule
    }

    #[test]
    fn empty_population_is_an_error() {
        let err = RuleValidator::new(&[])
            .validate(&[])
            .expect_err("coverage over nobody is undefined");
        assert!(matches!(err, Error::EmptyPopulation));
    }

    #[test]
    fn clause_needs_one_filter_and_condition_needs_every_clause() {
        let user = UserRecord::new(1, 1, 10).with_role_ids([5]).with_skill_ids([7]);
        let validator = RuleValidator::new(std::slice::from_ref(&user));

        let either = rule_with(vec![Clause::from([
            AttributeFilter::role(4),
            AttributeFilter::role(5),
        ])]);
        let both = rule_with(vec![
            Clause::from([AttributeFilter::role(5)]),
            Clause::from([AttributeFilter::skill(8)]),
        ]);

        assert!(validator.matches(&either, &user));
        assert!(!validator.matches(&both, &user));
    }

    #[test]
    fn rules_outside_the_users_scope_never_match() {
        let user = UserRecord::new(1, 2, 10);
        let validator = RuleValidator::new(std::slice::from_ref(&user));
        assert!(!validator.matches(&rule_with(Vec::new()), &user));
    }

    #[test]
    fn role_skill_filters_follow_the_matching_mode() {
        let user = UserRecord::new(1, 1, 10).with_role_skill_ids([9]).with_role_ids([9]);
        let population = std::slice::from_ref(&user);
        let rule = rule_with(vec![Clause::from([AttributeFilter::role_skill(9)])]);

        let dedicated = RuleValidator::new(population);
        let never =
            RuleValidator::new(population).with_role_skill_matching(RoleSkillMatching::Never);

        assert!(dedicated.matches(&rule, &user));
        assert!(!never.matches(&rule, &user));
    }

    #[test]
    fn role_and_skill_ids_do_not_cross_match() {
        let user = UserRecord::new(1, 1, 10).with_role_ids([9]);
        let validator = RuleValidator::new(std::slice::from_ref(&user));
        let skill_rule = rule_with(vec![Clause::from([AttributeFilter::skill(9)])]);
        let role_skill_rule = rule_with(vec![Clause::from([AttributeFilter::role_skill(9)])]);

        assert!(!validator.matches(&skill_rule, &user));
        assert!(!validator.matches(&role_skill_rule, &user));
    }

    #[test]
    fn matching_mode_parses_case_insensitively() {
        assert_eq!(
            "Never".parse::<RoleSkillMatching>(),
            Ok(RoleSkillMatching::Never)
        );
        assert_eq!(
            "dedicated".parse::<RoleSkillMatching>(),
            Ok(RoleSkillMatching::Dedicated)
        );
        assert!("sometimes".parse::<RoleSkillMatching>().is_err());
    }
}
