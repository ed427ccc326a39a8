use verdict_core::constants::OPEN_SOURCE_RELIABILITY;
use verdict_core::ToolRecord;

use super::{evaluate, Rule};

pub const RULES: &[Rule] = &[
    Rule::new(&["high", "excellent"], 10.0),
    Rule::new(&["good", "stable"], 7.0),
    Rule::new(&["moderate"], 5.0),
    Rule::new(&["low", "unstable"], 2.0),
];

/// Reliability score.
///
/// Open-source tools score a flat 8 and the `reliability` field is ignored,
/// so an open-source tool can lose this metric to a closed tool rated "High".
pub fn calculate(tool: &ToolRecord) -> f64 {
    if tool.open_source {
        return OPEN_SOURCE_RELIABILITY;
    }
    evaluate(tool.reliability.as_deref(), RULES)
}
