use verdict_core::ToolRecord;

use super::{evaluate, Rule};

/// Pricing rules, highest priority first. "free" outranks "open source"
/// so "Free and open source" scores as free.
pub const RULES: &[Rule] = &[
    Rule::new(&["free"], 10.0),
    Rule::new(&["open source"], 9.0),
    Rule::new(&["low", "affordable"], 7.0),
    Rule::new(&["moderate"], 5.0),
    Rule::new(&["high", "expensive"], 2.0),
];

/// Pricing score from the free-text `pricing` field.
pub fn calculate(tool: &ToolRecord) -> f64 {
    evaluate(tool.pricing.as_deref(), RULES)
}
