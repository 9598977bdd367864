use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{Grant, UserRecord};

/// Column layout of the per-user extract.
#[derive(Debug, Deserialize)]
struct ExtractRow {
    user_id: i64,
    workforce_id: i64,
    workgroup_id: i64,
    role_ids: String,
    skill_ids: String,
    role_skill_ids: String,
    grants: String,
}

/// Read user records from a CSV extract with a header row.
///
/// Expected columns: `user_id,workforce_id,workgroup_id,role_ids,skill_ids,role_skill_ids,grants`.
/// Id lists are `;`-separated; grants are `;`-separated `case_pool:permission_set`
/// pairs. Errors name the 1-based data line (header excluded).
pub fn read_extract<R: Read>(input: R) -> Result<Vec<UserRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut users = Vec::new();
    for (idx, row) in reader.deserialize::<ExtractRow>().enumerate() {
        let line = idx + 1;
        let row = row.map_err(|e| Error::MalformedRecord {
            line,
            message: e.to_string(),
        })?;
        users.push(UserRecord {
            user_id: row.user_id,
            workforce_id: row.workforce_id,
            workgroup_id: row.workgroup_id,
            role_ids: parse_id_list(&row.role_ids, line)?,
            skill_ids: parse_id_list(&row.skill_ids, line)?,
            role_skill_ids: parse_id_list(&row.role_skill_ids, line)?,
            grants: parse_grant_list(&row.grants, line)?.into_iter().collect(),
        });
    }
    Ok(users)
}

/// Open `path` and read it with [`read_extract`].
pub fn read_extract_file(path: &Path) -> Result<Vec<UserRecord>> {
    read_extract(File::open(path)?)
}

/// Parse a `;`-separated list of integers. Blank items are skipped.
pub fn parse_id_list(cell: &str, line: usize) -> Result<Vec<i64>> {
    list_items(cell)
        .map(|item| {
            item.parse::<i64>().map_err(|e| Error::MalformedRecord {
                line,
                message: format!("invalid id '{item}': {e}"),
            })
        })
        .collect()
}

/// Parse a `;`-separated list of `case_pool:permission_set` grants.
pub fn parse_grant_list(cell: &str, line: usize) -> Result<Vec<Grant>> {
    list_items(cell)
        .map(|item| {
            let malformed = |reason: String| Error::MalformedRecord {
                line,
                message: format!("invalid grant '{item}': {reason}"),
            };
            let (case_pool, permission_set) = item
                .split_once(':')
                .ok_or_else(|| malformed("expected CASE_POOL:PERMISSION_SET".to_string()))?;
            let case_pool_id = case_pool
                .trim()
                .parse::<i64>()
                .map_err(|e| malformed(e.to_string()))?;
            let permission_set_id = permission_set
                .trim()
                .parse::<i64>()
                .map_err(|e| malformed(e.to_string()))?;
            Ok(Grant::new(case_pool_id, permission_set_id))
        })
        .collect()
}

fn list_items(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(';').map(str::trim).filter(|item| !item.is_empty())
}
