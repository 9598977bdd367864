use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::filter::AttributeFilterKind;
use crate::model::grant::Grant;
use crate::model::rule::WorkgroupScope;

/// Ground truth for one user: who they are, what attributes they hold, and
/// which grants they actually have.
///
/// Attribute id lists keep the extract's order and may contain duplicates;
/// neither affects matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier.
    pub user_id: i64,
    /// Workforce the user belongs to.
    pub workforce_id: i64,
    /// Workgroup the user belongs to.
    pub workgroup_id: i64,
    /// Role ids held by the user.
    pub role_ids: Vec<i64>,
    /// Skill ids held by the user.
    pub skill_ids: Vec<i64>,
    /// Role-skill ids held by the user.
    pub role_skill_ids: Vec<i64>,
    /// Grants the user actually holds.
    pub grants: BTreeSet<Grant>,
}

impl UserRecord {
    /// A user with no attributes and no grants.
    pub fn new(user_id: i64, workforce_id: i64, workgroup_id: i64) -> Self {
        Self {
            user_id,
            workforce_id,
            workgroup_id,
            role_ids: Vec::new(),
            skill_ids: Vec::new(),
            role_skill_ids: Vec::new(),
            grants: BTreeSet::new(),
        }
    }

    /// Replace the role ids.
    pub fn with_role_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.role_ids = ids.into_iter().collect();
        self
    }

    /// Replace the skill ids.
    pub fn with_skill_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.skill_ids = ids.into_iter().collect();
        self
    }

    /// Replace the role-skill ids.
    pub fn with_role_skill_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.role_skill_ids = ids.into_iter().collect();
        self
    }

    /// Replace the grant set.
    pub fn with_grants(mut self, grants: impl IntoIterator<Item = Grant>) -> Self {
        self.grants = grants.into_iter().collect();
        self
    }

    /// The attribute id list a filter of `kind` is checked against.
    pub fn attribute_ids(&self, kind: AttributeFilterKind) -> &[i64] {
        match kind {
            AttributeFilterKind::Role => &self.role_ids,
            AttributeFilterKind::Skill => &self.skill_ids,
            AttributeFilterKind::RoleSkill => &self.role_skill_ids,
        }
    }

    /// `(workforce, workgroup)` pair used to decide which rules apply.
    pub fn scope(&self) -> WorkgroupScope {
        WorkgroupScope {
            workforce_id: self.workforce_id,
            workgroup_id: self.workgroup_id,
        }
    }
}
