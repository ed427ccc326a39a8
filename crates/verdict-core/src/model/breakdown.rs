use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::Metric;

/// Each metric score of a tool plus the weighted composite, for badges and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub pricing: f64,
    pub ease: f64,
    pub docs: f64,
    pub community: f64,
    pub reliability: f64,
    pub composite: f64,
}

impl ScoreBreakdown {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Pricing => self.pricing,
            Metric::Ease => self.ease,
            Metric::Docs => self.docs,
            Metric::Community => self.community,
            Metric::Reliability => self.reliability,
        }
    }
}
