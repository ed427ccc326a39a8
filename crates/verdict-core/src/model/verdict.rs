use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::{Confidence, Metric, ReasonMetric, Sentiment, Side};
use crate::persona::Persona;

/// A metric on which the two tools differ by more than the difference threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct KeyDifference {
    pub metric: Metric,
    /// The side with the higher metric score.
    pub advantage: Side,
    /// Name of the advantaged tool.
    pub advantaged_tool: String,
    pub description: String,
    /// Absolute score gap, always greater than the threshold.
    pub magnitude: f64,
}

/// Headline winner under the default (startup) lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OverallWinner {
    pub winner: String,
    pub side: Side,
    pub confidence: Confidence,
    /// Absolute composite score gap.
    pub score_diff: f64,
}

/// Winner for a single persona, with the persona-specific justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonaWinner {
    pub winner: String,
    pub side: Side,
    pub confidence: Confidence,
    pub reason: String,
}

/// One justification line shown under the verdict banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub metric: ReasonMetric,
    pub text: String,
    pub sentiment: Sentiment,
}

/// Per-persona recommendations. Each is computed independently and may
/// name a different winner than the others or the overall verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub startup: PersonaWinner,
    pub enterprise: PersonaWinner,
    pub learning: PersonaWinner,
}

impl Recommendations {
    pub fn get(&self, persona: Persona) -> &PersonaWinner {
        match persona {
            Persona::Startup => &self.startup,
            Persona::Enterprise => &self.enterprise,
            Persona::Learning => &self.learning,
        }
    }
}

/// The full opinionated comparison of two tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub winner: String,
    pub headline: String,
    pub confidence: Confidence,
    /// Never empty. At most `max_reasons` entries, largest gap first.
    pub reasons: Vec<Reason>,
    pub recommendations: Recommendations,
}
