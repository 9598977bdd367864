use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Rule;
use crate::validation::ValidationReport;

/// One flat row of the rules CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    /// Rule identifier.
    pub rule_id: u64,
    /// Workforce scope.
    pub workforce_id: i64,
    /// Workgroup scope.
    pub workgroup_id: i64,
    /// Case pool of the granted permission sets.
    pub case_pool_id: i64,
    /// `;`-joined permission set ids, ascending.
    pub permission_set_ids: String,
    /// Rendered condition; empty for unconditional rules.
    pub condition: String,
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            rule_id: rule.rule_id,
            workforce_id: rule.workforce_id,
            workgroup_id: rule.workgroup_id,
            case_pool_id: rule.case_pool_id,
            permission_set_ids: rule
                .granted_permission_set_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            condition: rule.render_condition(),
        }
    }
}

/// One flat row of the validation CSV: either the coverage row or an
/// uncovered grant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRow {
    /// `coverage` or `uncovered`.
    pub kind: &'static str,
    /// Case pool of an uncovered grant.
    pub case_pool_id: Option<i64>,
    /// Permission set of an uncovered grant.
    pub permission_set_id: Option<i64>,
    /// Coverage percentage, two decimals, on the coverage row only.
    pub coverage_percent: Option<String>,
}

/// Rows describing a validation report: coverage first, then every
/// structurally uncovered grant in ascending order.
pub fn validation_rows(report: &ValidationReport<'_>) -> Vec<ValidationRow> {
    let mut rows = vec![ValidationRow {
        kind: "coverage",
        case_pool_id: None,
        permission_set_id: None,
        coverage_percent: Some(format!("{:.2}", report.coverage_percent())),
    }];
    rows.extend(
        report
            .structurally_uncovered_grants
            .iter()
            .map(|grant| ValidationRow {
                kind: "uncovered",
                case_pool_id: Some(grant.case_pool_id),
                permission_set_id: Some(grant.permission_set_id),
                coverage_percent: None,
            }),
    );
    rows
}

/// Write `rules` as CSV with a header row.
pub fn write_rules_csv<W: Write>(out: W, rules: &[Rule]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for rule in rules {
        writer.serialize(RuleRow::from(rule))?;
    }
    if rules.is_empty() {
        writer.write_record([
            "rule_id",
            "workforce_id",
            "workgroup_id",
            "case_pool_id",
            "permission_set_ids",
            "condition",
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the validation rows of `report` as CSV with a header row.
pub fn write_validation_csv<W: Write>(out: W, report: &ValidationReport<'_>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in validation_rows(report) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
