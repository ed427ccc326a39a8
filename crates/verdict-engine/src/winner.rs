//! Overall winner and headline.

use verdict_core::constants::{OVERALL_MODERATE_BELOW, OVERALL_SLIGHT_BELOW};
use verdict_core::{Confidence, OverallWinner, Persona, PersonaWeights, Side, ToolRecord};

use crate::composite::calculate_tool_score;

/// Headline winner judged through the startup lens.
///
/// Ties go to `a`. There is always a winner.
pub fn determine_overall_winner(a: &ToolRecord, b: &ToolRecord) -> OverallWinner {
    overall_winner_with_weights(a, b, &Persona::OVERALL_LENS.default_weights())
}

/// [`determine_overall_winner`] with an explicit weight table.
pub fn overall_winner_with_weights(
    a: &ToolRecord,
    b: &ToolRecord,
    weights: &PersonaWeights,
) -> OverallWinner {
    let score_a = calculate_tool_score(a, weights);
    let score_b = calculate_tool_score(b, weights);
    let score_diff = (score_a - score_b).abs();
    let side = pick_side(score_a, score_b);

    OverallWinner {
        winner: side.pick(&a.name, &b.name).clone(),
        side,
        confidence: Confidence::from_gap(score_diff, OVERALL_SLIGHT_BELOW, OVERALL_MODERATE_BELOW),
        score_diff,
    }
}

/// `a` wins unless `b` scores strictly higher.
pub(crate) fn pick_side(score_a: f64, score_b: f64) -> Side {
    if score_a >= score_b {
        Side::A
    } else {
        Side::B
    }
}

/// Banner sentence for the verdict. Depends only on `confidence`.
pub fn generate_headline(winner: &str, confidence: Confidence) -> String {
    match confidence {
        Confidence::Slight => format!("{winner} edges out the competition for most developers"),
        Confidence::Moderate => format!("{winner} is the better choice for most use cases"),
        Confidence::Strong => format!("{winner} is significantly better than the alternative"),
    }
}
