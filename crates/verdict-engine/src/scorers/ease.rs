use verdict_core::ToolRecord;

use super::{evaluate, Rule};

/// Ease-of-use rules. "very easy" must precede "easy".
pub const RULES: &[Rule] = &[
    Rule::new(&["very easy", "beginner"], 10.0),
    Rule::new(&["easy"], 8.0),
    Rule::new(&["moderate"], 6.0),
    Rule::new(&["difficult", "complex"], 3.0),
];

/// Ease-of-use score from the `easeOfUse` field.
pub fn calculate(tool: &ToolRecord) -> f64 {
    evaluate(tool.ease_of_use.as_deref(), RULES)
}
