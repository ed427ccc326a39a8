use verdict_core::ToolRecord;

use super::{evaluate, Rule};

pub const RULES: &[Rule] = &[
    Rule::new(&["excellent", "comprehensive"], 10.0),
    Rule::new(&["good", "detailed"], 8.0),
    Rule::new(&["basic", "limited"], 4.0),
    Rule::new(&["poor", "minimal"], 2.0),
];

/// Documentation score from the `documentation` field.
pub fn calculate(tool: &ToolRecord) -> f64 {
    evaluate(tool.documentation.as_deref(), RULES)
}
