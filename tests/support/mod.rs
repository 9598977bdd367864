#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use grants2rules::model::{AttributeFilter, Combination, Grant, UserRecord};
use grants2rules::parser::{extract, validity};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_input(fixture: &str) -> PathBuf {
    fixture_dir(fixture).join("input.csv")
}

pub(crate) fn load_fixture_users(fixture: &str) -> Vec<UserRecord> {
    let users =
        extract::read_extract_file(&fixture_input(fixture)).expect("fixture extract should parse");
    validity::retain_valid(users)
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

pub(crate) fn grants(pairs: &[(i64, i64)]) -> Vec<Grant> {
    pairs.iter().map(|(cp, ps)| Grant::new(*cp, *ps)).collect()
}

/// User in workforce 1 with the given workgroup, roles, skills, and grants.
pub(crate) fn user(
    user_id: i64,
    workgroup_id: i64,
    roles: &[i64],
    skills: &[i64],
    held: &[(i64, i64)],
) -> UserRecord {
    UserRecord::new(user_id, 1, workgroup_id)
        .with_role_ids(roles.iter().copied())
        .with_skill_ids(skills.iter().copied())
        .with_grants(grants(held))
}

/// Combination of role filters.
pub(crate) fn roles(ids: &[i64]) -> Combination {
    ids.iter().map(|id| AttributeFilter::role(*id)).collect()
}
