use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five scored dimensions of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Pricing,
    Ease,
    Docs,
    Community,
    Reliability,
}

impl Metric {
    /// All metrics in evaluation order. Ties between equal differences keep this order.
    pub const ALL: [Metric; 5] = [
        Self::Pricing,
        Self::Ease,
        Self::Docs,
        Self::Community,
        Self::Reliability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Ease => "ease",
            Self::Docs => "docs",
            Self::Community => "community",
            Self::Reliability => "reliability",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric a verdict reason refers to. `Overall` is only used by the fallback reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReasonMetric {
    Pricing,
    Ease,
    Docs,
    Community,
    Reliability,
    Overall,
}

impl From<Metric> for ReasonMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Pricing => Self::Pricing,
            Metric::Ease => Self::Ease,
            Metric::Docs => Self::Docs,
            Metric::Community => Self::Community,
            Metric::Reliability => Self::Reliability,
        }
    }
}

/// Which of the two compared tools a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Pick the value belonging to this side.
    pub fn pick<T>(self, a: T, b: T) -> T {
        match self {
            Self::A => a,
            Self::B => b,
        }
    }
}

/// How decisively the winner beat the other tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Slight,
    Moderate,
    Strong,
}

impl Confidence {
    /// Classify an absolute score gap: `< slight_below` is slight,
    /// `< moderate_below` is moderate, anything else is strong.
    pub fn from_gap(gap: f64, slight_below: f64, moderate_below: f64) -> Self {
        if gap < slight_below {
            Self::Slight
        } else if gap < moderate_below {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slight => "slight",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a reason speaks for or against the overall winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}
