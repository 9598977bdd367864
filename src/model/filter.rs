use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which attribute list of a user a filter is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeFilterKind {
    /// Matches against the user's role ids.
    Role,
    /// Matches against the user's skill ids.
    Skill,
    /// Matches against the user's role-skill ids.
    RoleSkill,
}

impl AttributeFilterKind {
    /// Token used when rendering a filter, e.g. `role_skill` in `role_skill:7`.
    pub fn token(self) -> &'static str {
        match self {
            AttributeFilterKind::Role => "role",
            AttributeFilterKind::Skill => "skill",
            AttributeFilterKind::RoleSkill => "role_skill",
        }
    }
}

impl fmt::Display for AttributeFilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AttributeFilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "role" => Ok(AttributeFilterKind::Role),
            "skill" => Ok(AttributeFilterKind::Skill),
            "role_skill" => Ok(AttributeFilterKind::RoleSkill),
            other => Err(Error::InvalidFilter(format!("unknown filter kind '{other}'"))),
        }
    }
}

/// One atomic fact about a user, such as "has role 1880".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttributeFilter {
    /// Attribute list the id belongs to.
    pub kind: AttributeFilterKind,
    /// Role, skill, or role-skill identifier.
    pub id: i64,
}

impl AttributeFilter {
    /// Filter on a role id.
    pub fn role(id: i64) -> Self {
        Self {
            kind: AttributeFilterKind::Role,
            id,
        }
    }

    /// Filter on a skill id.
    pub fn skill(id: i64) -> Self {
        Self {
            kind: AttributeFilterKind::Skill,
            id,
        }
    }

    /// Filter on a role-skill id.
    pub fn role_skill(id: i64) -> Self {
        Self {
            kind: AttributeFilterKind::RoleSkill,
            id,
        }
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for AttributeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::InvalidFilter(format!("expected KIND:ID, got '{s}'")))?;
        let kind: AttributeFilterKind = kind.parse()?;
        let id = id
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::InvalidFilter(format!("bad id in '{s}': {e}")))?;
        Ok(Self { kind, id })
    }
}

/// The full set of filters describing one user; a candidate sufficient condition.
pub type Combination = BTreeSet<AttributeFilter>;

/// A disjunction of filters inside a rule condition.
pub type Clause = BTreeSet<AttributeFilter>;
