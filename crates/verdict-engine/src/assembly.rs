//! Verdict assembly: overall winner → ranked reasons → persona recommendations.

use verdict_core::{
    KeyDifference, Persona, Reason, ReasonMetric, Recommendations, Sentiment, Side,
    StaticWeightProvider, ToolRecord, Verdict, WeightProvider,
};

use crate::differences::key_differences_with_threshold;
use crate::engine::EngineSettings;
use crate::persona::persona_winner_with_weights;
use crate::winner::{generate_headline, overall_winner_with_weights};

/// Compare two tools with the built-in persona tables and default settings.
///
/// Always names a winner and always carries at least one reason.
pub fn generate_verdict(a: &ToolRecord, b: &ToolRecord) -> Verdict {
    assemble(a, b, &StaticWeightProvider, &EngineSettings::default())
}

/// Use `precomputed` when the caller already has a verdict, otherwise compute one.
pub fn resolve_verdict(precomputed: Option<Verdict>, a: &ToolRecord, b: &ToolRecord) -> Verdict {
    precomputed.unwrap_or_else(|| generate_verdict(a, b))
}

/// Reason used when no metric differs by more than the threshold.
pub fn fallback_reason(winner: &str) -> Reason {
    Reason {
        metric: ReasonMetric::Overall,
        text: format!("{winner} has a slight edge in overall quality"),
        sentiment: Sentiment::Positive,
    }
}

pub(crate) fn assemble(
    a: &ToolRecord,
    b: &ToolRecord,
    provider: &dyn WeightProvider,
    settings: &EngineSettings,
) -> Verdict {
    let overall = overall_winner_with_weights(a, b, &provider.weights(Persona::OVERALL_LENS));

    let differences = key_differences_with_threshold(a, b, settings.difference_threshold);
    let mut reasons: Vec<Reason> = differences
        .iter()
        .take(settings.max_reasons)
        .map(|d| to_reason(d, overall.side))
        .collect();
    if reasons.is_empty() {
        reasons.push(fallback_reason(&overall.winner));
    }

    // Each persona is judged on its own; disagreement with the overall winner is expected.
    let recommend = |persona: Persona| {
        persona_winner_with_weights(a, b, persona, &provider.weights(persona))
    };
    let recommendations = Recommendations {
        startup: recommend(Persona::Startup),
        enterprise: recommend(Persona::Enterprise),
        learning: recommend(Persona::Learning),
    };

    tracing::debug!(
        winner = %overall.winner,
        confidence = %overall.confidence,
        score_diff = overall.score_diff,
        differences = differences.len(),
        "verdict assembled"
    );

    Verdict {
        headline: generate_headline(&overall.winner, overall.confidence),
        winner: overall.winner,
        confidence: overall.confidence,
        reasons,
        recommendations,
    }
}

fn to_reason(difference: &KeyDifference, winner: Side) -> Reason {
    let sentiment = if difference.advantage == winner {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };
    Reason {
        metric: difference.metric.into(),
        text: difference.description.clone(),
        sentiment,
    }
}
