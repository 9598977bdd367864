use std::collections::BTreeSet;
use std::fmt::Write;

use crate::model::Grant;
use crate::validation::ValidationReport;

/// Build a markdown report with the coverage summary and every mismatch.
pub fn build_report(report: &ValidationReport<'_>) -> String {
    let mut out = String::new();

    writeln!(out, "# grants2rules Validation Report").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Summary").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "| Metric | Value |").unwrap();
    writeln!(out, "|--------|-------|").unwrap();
    writeln!(out, "| Users | {} |", report.population).unwrap();
    writeln!(out, "| Rules | {} |", report.rule_count).unwrap();
    writeln!(out, "| Coverage | {:.2}% |", report.coverage_percent()).unwrap();
    writeln!(out, "| Under-granted users | {} |", report.users_under_granted.len()).unwrap();
    writeln!(out, "| Over-granted users | {} |", report.users_over_granted.len()).unwrap();
    writeln!(
        out,
        "| Structurally uncovered grants | {} |",
        report.structurally_uncovered_grants.len()
    )
    .unwrap();

    if !report.users_under_granted.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Under-granted Users").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "| User | Workgroup | Missing grants |").unwrap();
        writeln!(out, "|------|-----------|----------------|").unwrap();
        for user in &report.users_under_granted {
            writeln!(
                out,
                "| {} | {} | {} |",
                user.user_id,
                user.workgroup_id,
                format_grants(&report.missing_grants(user))
            )
            .unwrap();
        }
    }

    if !report.users_over_granted.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Over-granted Users").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "| User | Workgroup | Excess grants |").unwrap();
        writeln!(out, "|------|-----------|---------------|").unwrap();
        for user in &report.users_over_granted {
            writeln!(
                out,
                "| {} | {} | {} |",
                user.user_id,
                user.workgroup_id,
                format_grants(&report.excess_grants(user))
            )
            .unwrap();
        }
    }

    if !report.structurally_uncovered_grants.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Structurally Uncovered Grants").unwrap();
        writeln!(out).unwrap();
        for grant in &report.structurally_uncovered_grants {
            writeln!(
                out,
                "- case pool {}, permission set {}",
                grant.case_pool_id, grant.permission_set_id
            )
            .unwrap();
        }
    }

    out
}

fn format_grants(grants: &BTreeSet<Grant>) -> String {
    grants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
