use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::model::Metric;

/// Metric weights for one persona. Each weight is in [0, 1] and they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonaWeights {
    pub pricing: f64,
    pub ease: f64,
    pub docs: f64,
    pub community: f64,
    pub reliability: f64,
}

impl PersonaWeights {
    /// Startups care most about cost and time-to-first-build.
    pub const STARTUP: PersonaWeights = PersonaWeights {
        pricing: 0.30,
        ease: 0.30,
        docs: 0.15,
        community: 0.15,
        reliability: 0.10,
    };

    /// Enterprises care most about reliability and documentation for team adoption.
    pub const ENTERPRISE: PersonaWeights = PersonaWeights {
        pricing: 0.10,
        ease: 0.10,
        docs: 0.30,
        community: 0.15,
        reliability: 0.35,
    };

    /// Learners care about approachability, docs, and not paying.
    pub const LEARNING: PersonaWeights = PersonaWeights {
        pricing: 0.25,
        ease: 0.30,
        docs: 0.25,
        community: 0.15,
        reliability: 0.05,
    };

    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Pricing => self.pricing,
            Metric::Ease => self.ease,
            Metric::Docs => self.docs,
            Metric::Community => self.community,
            Metric::Reliability => self.reliability,
        }
    }

    pub fn sum(&self) -> f64 {
        Metric::ALL.iter().map(|m| self.weight(*m)).sum()
    }

    /// Check the range and sum invariants. `field` prefixes error messages,
    /// e.g. `personas.startup`.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        for metric in Metric::ALL {
            let w = self.weight(metric);
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{field}.{metric}"),
                    message: format!("weight {w} must be between 0.0 and 1.0"),
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}
