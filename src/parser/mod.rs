/// Parsing rendered rule conditions back into clauses.
pub mod condition;
/// Reading the per-user CSV extract.
pub mod extract;
/// Reading a previously written rules CSV.
pub mod rules;
/// Dropping extract rows that cannot be grouped.
pub mod validity;
