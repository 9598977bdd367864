use grants2rules::model::Grant;
use grants2rules::parser::{extract, validity};
use grants2rules::Error;

mod support;

#[test]
fn parse_small_workforce_fixture() {
    let users = extract::read_extract_file(&support::fixture_input("small_workforce"))
        .expect("fixture extract should parse");
    assert_eq!(users.len(), 8);

    let first = &users[0];
    assert_eq!((first.user_id, first.workforce_id, first.workgroup_id), (1, 1, 10));
    assert_eq!(first.role_ids, vec![100]);
    assert_eq!(first.skill_ids, vec![200]);
    assert!(first.grants.contains(&Grant::new(13, 400)));

    let no_attributes = &users[6];
    assert!(no_attributes.role_ids.is_empty());
    assert!(no_attributes.skill_ids.is_empty());
    assert!(no_attributes.role_skill_ids.is_empty());
}

#[test]
fn validity_filter_drops_the_unassigned_row() {
    let users = extract::read_extract_file(&support::fixture_input("small_workforce"))
        .expect("fixture extract should parse");
    let valid = validity::retain_valid(users);

    assert_eq!(valid.len(), 7);
    assert!(valid.iter().all(|u| u.workgroup_id > 0));
    assert!(valid.iter().all(|u| u.user_id != 6));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = extract::read_extract_file(&support::fixture_dir("does_not_exist").join("input.csv"))
        .expect_err("file does not exist");
    assert!(matches!(err, Error::Io(_)), "{err}");
}

#[test]
fn missing_column_is_malformed() {
    let csv = "user_id,workforce_id\n1,1\n";
    let err = extract::read_extract(csv.as_bytes()).expect_err("workgroup_id column missing");
    assert!(matches!(err, Error::MalformedRecord { line: 1, .. }), "{err}");
}
