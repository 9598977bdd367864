/// Writes rules, validation rows, and the report to disk.
pub mod formatter;
/// Builds a Markdown validation report.
pub mod report;
/// Flat CSV rows for rules and validation results.
pub mod rows;
