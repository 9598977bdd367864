use std::fs::File;
use std::io::BufWriter;
use std::path::{Component, Path};

use tracing::info;

use crate::error::{Error, Result};
use crate::model::Rule;
use crate::output::{report, rows};
use crate::validation::ValidationReport;

/// Write all output files to the specified directory.
///
/// Always writes `{name}_rules.csv` and `{name}_rules.json`; with a report,
/// also `{name}_validation.csv` and `{name}_report.md`.
pub fn write_output(
    output_dir: &Path,
    name: &str,
    rules: &[Rule],
    validation: Option<&ValidationReport<'_>>,
) -> Result<()> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir)?;

    let rules_csv = output_dir.join(format!("{name}_rules.csv"));
    rows::write_rules_csv(BufWriter::new(File::create(&rules_csv)?), rules)?;

    let rules_json = output_dir.join(format!("{name}_rules.json"));
    std::fs::write(&rules_json, serde_json::to_string_pretty(rules)?)?;

    if let Some(report_data) = validation {
        let validation_csv = output_dir.join(format!("{name}_validation.csv"));
        rows::write_validation_csv(BufWriter::new(File::create(&validation_csv)?), report_data)?;

        let report_path = output_dir.join(format!("{name}_report.md"));
        std::fs::write(&report_path, report::build_report(report_data))?;
    }

    info!(
        dir = %output_dir.display(),
        name,
        rules = rules.len(),
        validated = validation.is_some(),
        "wrote output artifacts"
    );
    Ok(())
}

fn validate_output_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidOutputName(
            "output name must not be empty".to_string(),
        ));
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Err(Error::InvalidOutputName(format!(
            "'{name}': absolute paths are not allowed"
        )));
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return Err(Error::InvalidOutputName(format!(
            "'{name}': traversal segments are not allowed"
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidOutputName(format!(
            "'{name}': path separators are not allowed"
        )));
    }
    Ok(())
}
