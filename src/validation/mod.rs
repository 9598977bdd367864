/// The coverage report produced by one validation call.
pub mod coverage;
/// Evaluating rules per user and scoring them against ground truth.
pub mod validator;

pub use coverage::ValidationReport;
pub use validator::{RoleSkillMatching, RuleValidator};
