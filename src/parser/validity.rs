use tracing::warn;

use crate::model::UserRecord;

/// Drop records whose workgroup id is not positive.
///
/// Such rows come from users without a workgroup assignment; grouping them
/// would merge unrelated users into one pseudo-workgroup.
pub fn retain_valid(users: Vec<UserRecord>) -> Vec<UserRecord> {
    let total = users.len();
    let valid: Vec<UserRecord> = users
        .into_iter()
        .filter(|user| user.workgroup_id > 0)
        .collect();

    let dropped = total - valid.len();
    if dropped > 0 {
        warn!(dropped, total, "dropped records without a positive workgroup id");
    }
    valid
}
