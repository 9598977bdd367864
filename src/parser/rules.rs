use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Rule;
use crate::output::rows::RuleRow;
use crate::parser::condition::parse_condition;
use crate::parser::extract::parse_id_list;

/// Read a rules CSV as written by [`crate::output::rows::write_rules_csv`].
pub fn read_rules<R: Read>(input: R) -> Result<Vec<Rule>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rules = Vec::new();
    for (idx, row) in reader.deserialize::<RuleRow>().enumerate() {
        let line = idx + 1;
        let row = row.map_err(|e| Error::MalformedRecord {
            line,
            message: e.to_string(),
        })?;
        let condition = parse_condition(&row.condition).map_err(|e| Error::MalformedRecord {
            line,
            message: e.to_string(),
        })?;
        rules.push(Rule {
            rule_id: row.rule_id,
            workforce_id: row.workforce_id,
            workgroup_id: row.workgroup_id,
            case_pool_id: row.case_pool_id,
            granted_permission_set_ids: parse_id_list(&row.permission_set_ids, line)?
                .into_iter()
                .collect(),
            condition,
        });
    }
    Ok(rules)
}

/// Open `path` and read it with [`read_rules`].
pub fn read_rules_file(path: &Path) -> Result<Vec<Rule>> {
    read_rules(File::open(path)?)
}
