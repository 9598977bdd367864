use std::collections::{BTreeMap, BTreeSet};

use grants2rules::generator::concentrator::concentrate;
use grants2rules::generator::rule_ids::RuleIdGenerator;
use grants2rules::model::{Grant, Rule, WorkgroupScope};
use proptest::prelude::*;

mod support;

fn scope(workgroup_id: i64) -> WorkgroupScope {
    WorkgroupScope {
        workforce_id: 1,
        workgroup_id,
    }
}

fn candidate(id: u64, workgroup_id: i64, grant: (i64, i64), roles: &[i64]) -> Rule {
    Rule::conjunction(
        id,
        scope(workgroup_id),
        Grant::new(grant.0, grant.1),
        &support::roles(roles),
    )
}

fn permission_union(rules: &[Rule]) -> BTreeMap<(i64, i64), BTreeSet<i64>> {
    let mut union: BTreeMap<(i64, i64), BTreeSet<i64>> = BTreeMap::new();
    for rule in rules {
        union
            .entry((rule.workgroup_id, rule.case_pool_id))
            .or_default()
            .extend(rule.granted_permission_set_ids.iter().copied());
    }
    union
}

#[test]
fn disjoint_workgroups_are_renumbered_from_zero() {
    let mut ids = RuleIdGenerator::new();
    let first_workgroup = vec![
        candidate(ids.next_id(), 10, (12, 300), &[1]),
        candidate(ids.next_id(), 10, (12, 301), &[1]),
    ];
    let second_workgroup = vec![
        candidate(ids.next_id(), 20, (12, 300), &[1]),
        candidate(ids.next_id(), 20, (12, 300), &[2]),
    ];
    let candidates: Vec<Rule> = first_workgroup.into_iter().chain(second_workgroup).collect();
    assert_eq!(
        candidates.iter().map(|r| r.rule_id).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );

    let merged = concentrate(&candidates, &mut ids).expect("buckets are consistent");

    assert_eq!(merged.len(), 3, "one bucket in workgroup 10, two in 20");
    assert_eq!(
        merged.iter().map(|r| r.rule_id).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(merged[0].granted_permission_set_ids, BTreeSet::from([300, 301]));
}

#[test]
fn unconditional_and_conditional_rules_stay_apart() {
    let candidates = vec![
        Rule::unconditional(scope(10), 12, [300]),
        candidate(1, 10, (12, 301), &[5]),
    ];

    let merged = concentrate(&candidates, &mut RuleIdGenerator::new()).expect("consistent");

    assert_eq!(merged.len(), 2);
    assert!(merged[0].is_unconditional());
    assert!(!merged[1].is_unconditional());
}

#[test]
fn concentrating_twice_changes_nothing_but_ids() {
    let candidates = vec![
        candidate(0, 10, (12, 300), &[1, 2]),
        candidate(1, 10, (12, 301), &[1, 2]),
        candidate(2, 10, (13, 300), &[1]),
    ];
    let mut ids = RuleIdGenerator::new();

    let once = concentrate(&candidates, &mut ids).expect("consistent");
    let twice = concentrate(&once, &mut ids).expect("consistent");

    assert_eq!(once, twice);
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(
        (
            1i64..3,
            1i64..3,
            0i64..5,
            prop::collection::btree_set(0i64..3, 0..3),
        ),
        0..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (wg, cp, ps, roles))| {
                let roles: Vec<i64> = roles.into_iter().collect();
                candidate(idx as u64, wg, (cp, ps), &roles)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn concentration_preserves_grant_union_per_scope(candidates in candidates_strategy()) {
        let merged = concentrate(&candidates, &mut RuleIdGenerator::new())
            .expect("single workforce is always consistent");
        prop_assert_eq!(permission_union(&merged), permission_union(&candidates));
    }

    #[test]
    fn concentrated_ids_are_contiguous_from_zero(candidates in candidates_strategy()) {
        let merged = concentrate(&candidates, &mut RuleIdGenerator::new())
            .expect("single workforce is always consistent");
        let ids: Vec<u64> = merged.iter().map(|r| r.rule_id).collect();
        let expected: Vec<u64> = (0..merged.len() as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn concentrated_buckets_are_unique(candidates in candidates_strategy()) {
        let merged = concentrate(&candidates, &mut RuleIdGenerator::new())
            .expect("single workforce is always consistent");
        let keys: BTreeSet<_> = merged
            .iter()
            .map(|r| (r.workgroup_id, r.case_pool_id, r.condition.clone()))
            .collect();
        prop_assert_eq!(keys.len(), merged.len());
    }
}
