use crate::error::{Error, Result};
use crate::model::{AttributeFilter, Clause};

/// Parse a condition rendered by [`crate::model::Rule::render_condition`].
///
/// Clauses are separated by ` AND `; a clause is either one filter or a
/// parenthesized ` OR ` list, where `()` is the empty clause no user
/// satisfies. Blank text is the unconditional (empty) condition.
pub fn parse_condition(text: &str) -> Result<Vec<Clause>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(" AND ").map(parse_clause).collect()
}

fn parse_clause(text: &str) -> Result<Clause> {
    let text = text.trim();
    let inner = match (text.strip_prefix('('), text.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => text,
        _ => return Err(Error::InvalidFilter(format!("unbalanced clause '{text}'"))),
    };
    if inner.trim().is_empty() && inner.len() < text.len() {
        return Ok(Clause::new());
    }

    let clause = inner
        .split(" OR ")
        .map(str::parse::<AttributeFilter>)
        .collect::<Result<Clause>>()?;
    if clause.is_empty() {
        return Err(Error::InvalidFilter(format!("empty clause '{text}'")));
    }
    Ok(clause)
}
