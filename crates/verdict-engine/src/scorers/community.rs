use verdict_core::ToolRecord;

use super::{evaluate, Rule};

pub const RULES: &[Rule] = &[
    Rule::new(&["large", "vibrant"], 10.0),
    Rule::new(&["active", "growing"], 7.0),
    Rule::new(&["small", "limited"], 4.0),
];

/// Community score from the `community` field.
pub fn calculate(tool: &ToolRecord) -> f64 {
    evaluate(tool.community.as_deref(), RULES)
}
