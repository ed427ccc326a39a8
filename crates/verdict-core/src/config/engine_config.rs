//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DIFFERENCE_THRESHOLD, DEFAULT_MAX_REASONS};

/// Tunables for verdict assembly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum metric gap (exclusive) for a key difference. Default: 0.5.
    pub difference_threshold: Option<f64>,
    /// Maximum reasons attached to a verdict. Default: 3.
    pub max_reasons: Option<usize>,
}

impl EngineConfig {
    /// Returns the effective difference threshold, defaulting to 0.5.
    pub fn effective_difference_threshold(&self) -> f64 {
        self.difference_threshold.unwrap_or(DEFAULT_DIFFERENCE_THRESHOLD)
    }

    /// Returns the effective reason limit, defaulting to 3.
    pub fn effective_max_reasons(&self) -> usize {
        self.max_reasons.unwrap_or(DEFAULT_MAX_REASONS)
    }
}
