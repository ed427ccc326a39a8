//! Pairwise metric differences, ranked by magnitude.

use verdict_core::constants::DEFAULT_DIFFERENCE_THRESHOLD;
use verdict_core::{KeyDifference, Metric, Side, ToolRecord};

use crate::scorers;

/// Metrics on which `a` and `b` differ by more than 0.5, largest gap first.
///
/// Callers display the top few. An empty list means the tools are
/// indistinguishable metric by metric; the caller supplies a fallback.
pub fn calculate_key_differences(a: &ToolRecord, b: &ToolRecord) -> Vec<KeyDifference> {
    key_differences_with_threshold(a, b, DEFAULT_DIFFERENCE_THRESHOLD)
}

/// Same as [`calculate_key_differences`] with a custom threshold (exclusive).
pub fn key_differences_with_threshold(
    a: &ToolRecord,
    b: &ToolRecord,
    threshold: f64,
) -> Vec<KeyDifference> {
    let mut differences: Vec<KeyDifference> = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let score_a = scorers::score_metric(a, metric);
            let score_b = scorers::score_metric(b, metric);
            let magnitude = (score_a - score_b).abs();
            if magnitude <= threshold {
                return None;
            }

            let advantage = if score_a > score_b { Side::A } else { Side::B };
            let advantaged_tool = advantage.pick(&a.name, &b.name).clone();
            Some(KeyDifference {
                metric,
                advantage,
                description: describe(metric, &advantaged_tool),
                advantaged_tool,
                magnitude,
            })
        })
        .collect();

    // Stable: equal magnitudes keep metric order.
    differences.sort_by(|x, y| y.magnitude.total_cmp(&x.magnitude));
    differences
}

/// Human-readable line naming the tool that is ahead on `metric`.
pub fn describe(metric: Metric, tool_name: &str) -> String {
    match metric {
        Metric::Pricing => format!("{tool_name} offers better pricing"),
        Metric::Ease => format!("{tool_name} is easier to use"),
        Metric::Docs => format!("{tool_name} has better documentation"),
        Metric::Community => format!("{tool_name} has a larger community"),
        Metric::Reliability => format!("{tool_name} is more reliable"),
    }
}
