use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of access: a permission set within a case pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Grant {
    /// Case pool the permission applies to.
    pub case_pool_id: i64,
    /// Permission set granted within the case pool.
    pub permission_set_id: i64,
}

impl Grant {
    /// Build a grant from its two identifiers.
    pub fn new(case_pool_id: i64, permission_set_id: i64) -> Self {
        Self {
            case_pool_id,
            permission_set_id,
        }
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.case_pool_id, self.permission_set_id)
    }
}
