//! Infer a minimal, auditable set of attribute-based access rules from observed
//! per-user permission grants, and measure how faithfully the rules reproduce them.
#![warn(missing_docs)]

/// Workgroup grouping, common-grant extraction, combination collection, and minimal-cover reduction.
pub mod analysis;
/// Crate error type.
pub mod error;
/// Rule synthesis, concentration, and the end-to-end pipeline.
pub mod generator;
/// Value types: attribute filters, grants, user records, and rules.
pub mod model;
/// Artifact writing: rule and validation CSVs, JSON, and the Markdown report.
pub mod output;
/// Extract and rules-file reading, plus the validity filter.
pub mod parser;
/// Replaying a rule set against ground truth.
pub mod validation;

pub use error::{Error, Result};
