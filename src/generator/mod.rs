/// Merging rules that share scope and condition.
pub mod concentrator;
/// End-to-end synthesis over a population.
pub mod pipeline;
/// Monotonic rule-id generator for one synthesis run.
pub mod rule_ids;
/// Turning a reduced antichain into conjunction rules.
pub mod synthesizer;
