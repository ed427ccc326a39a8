use verdict_core::constants::{MAX_SCORE, MIN_SCORE};
use verdict_core::{Metric, PersonaWeights, ScoreBreakdown, ToolRecord};

use crate::scorers;

/// Weighted composite score of a tool.
///
/// ```text
/// composite = Σ weight(metric) × score(metric)
/// ```
///
/// Result is clamped to [0.0, 10.0]. Weights are non-negative, so the
/// composite never decreases when a single metric score increases.
pub fn calculate_tool_score(tool: &ToolRecord, weights: &PersonaWeights) -> f64 {
    score_breakdown(tool, weights).composite
}

/// Compute each metric score individually alongside the composite.
pub fn score_breakdown(tool: &ToolRecord, weights: &PersonaWeights) -> ScoreBreakdown {
    let scores = Metric::ALL.map(|m| scorers::score_metric(tool, m));

    let composite = Metric::ALL
        .iter()
        .zip(scores)
        .map(|(&m, score)| weights.weight(m) * score)
        .sum::<f64>()
        .clamp(MIN_SCORE, MAX_SCORE);

    let [pricing, ease, docs, community, reliability] = scores;
    ScoreBreakdown {
        pricing,
        ease,
        docs,
        community,
        reliability,
        composite,
    }
}
