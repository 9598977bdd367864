//! Error types shared by the synthesis core and its file collaborators.

use thiserror::Error;

/// Result type for `grants2rules` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while synthesizing, validating, reading, or writing rules.
#[derive(Debug, Error)]
pub enum Error {
    /// The common-grant extractor was handed a workgroup with no users.
    #[error("workgroup has no users; common grants are undefined")]
    EmptyWorkgroup,

    /// The validator was constructed over an empty ground-truth population.
    #[error("validation population is empty; coverage is undefined")]
    EmptyPopulation,

    /// A concentration bucket whose members disagree despite sharing a grouping key.
    #[error("inconsistent rule scope in workgroup {workgroup_id}, case pool {case_pool_id}: {detail}")]
    InconsistentScope {
        /// Workgroup of the offending bucket.
        workgroup_id: i64,
        /// Case pool of the offending bucket.
        case_pool_id: i64,
        /// Which field disagreed.
        detail: String,
    },

    /// A data row of an extract or rules file could not be interpreted.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based data line (header excluded).
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// A rendered attribute filter literal could not be parsed.
    #[error("invalid attribute filter: {0}")]
    InvalidFilter(String),

    /// An artifact base name that would escape the output directory.
    #[error("invalid output name: {0}")]
    InvalidOutputName(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader or writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
