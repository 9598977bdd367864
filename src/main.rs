//! CLI entry point for `grants2rules`.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use grants2rules::generator::pipeline;
use grants2rules::model::Rule;
use grants2rules::output::formatter;
use grants2rules::parser::{extract, rules, validity};
use grants2rules::validation::{RoleSkillMatching, RuleValidator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grants2rules",
    about = "Infer attribute-based access rules from observed permission grants and score them"
)]
struct Cli {
    /// Input CSV extract, one row per user
    input: PathBuf,

    /// Validate an existing rules CSV instead of synthesizing new rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output directory
    #[arg(long, env = "GRANTS2RULES_OUTPUT_DIR", default_value = "grants2rules-output")]
    output_dir: PathBuf,

    /// Base name for output files (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// How role-skill filters are matched during validation
    #[arg(long, default_value = "dedicated")]
    role_skill_matching: RoleSkillMatching,

    /// Exit with status 1 when coverage falls below this ratio
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    min_coverage: f64,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Stage 1: Read and filter the extract
    let users = match extract::read_extract_file(&cli.input) {
        Ok(users) => validity::retain_valid(users),
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            process::exit(2);
        }
    };
    info!(users = users.len(), "loaded extract");

    // Stage 2: Obtain the rule set
    let rule_set: Vec<Rule> = match &cli.rules {
        Some(path) => match rules::read_rules_file(path) {
            Ok(rule_set) => rule_set,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(2);
            }
        },
        None => match pipeline::synthesize(&users) {
            Ok(outcome) => outcome.rules,
            Err(e) => {
                eprintln!("Rule synthesis failed: {e}");
                process::exit(2);
            }
        },
    };

    // Stage 3: Validate against the extract
    let validator = RuleValidator::new(&users).with_role_skill_matching(cli.role_skill_matching);
    let report = match validator.validate(&rule_set) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Validation failed: {e}");
            process::exit(2);
        }
    };

    // Stage 4: Write output
    let name = cli.name.clone().unwrap_or_else(|| default_name(&cli.input));
    if let Err(e) = formatter::write_output(&cli.output_dir, &name, &rule_set, Some(&report)) {
        eprintln!("Error writing output: {e}");
        process::exit(2);
    }

    info!(
        coverage_percent = report.coverage_percent(),
        under_granted = report.users_under_granted.len(),
        over_granted = report.users_over_granted.len(),
        "validation complete"
    );

    if report.coverage_ratio < cli.min_coverage {
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn default_name(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

fn parse_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|e| format!("Invalid coverage ratio '{value}': {e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("Coverage ratio must be between 0 and 1, got {ratio}"))
    }
}
