/// Attribute filters, combinations, and clauses.
pub mod filter;
/// The `(case pool, permission set)` unit of access.
pub mod grant;
/// Rules, their scope, and condition evaluation.
pub mod rule;
/// Per-user ground-truth records read from the extract.
pub mod user;

pub use filter::{AttributeFilter, AttributeFilterKind, Clause, Combination};
pub use grant::Grant;
pub use rule::{Rule, WorkgroupScope};
pub use user::UserRecord;
