// Single source of truth for engine constants.

// --- Scoring ---
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
/// Score assigned when a descriptor is absent or matches no rule.
pub const NEUTRAL_SCORE: f64 = 5.0;
/// Reliability score for open-source tools, regardless of the descriptor.
pub const OPEN_SOURCE_RELIABILITY: f64 = 8.0;

// --- Differences ---
/// A metric gap must strictly exceed this to count as a key difference.
pub const DEFAULT_DIFFERENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_REASONS: usize = 3;

// --- Confidence bands ---
// Overall and persona bands differ on the upper bound. Do not unify.
pub const OVERALL_SLIGHT_BELOW: f64 = 0.5;
pub const OVERALL_MODERATE_BELOW: f64 = 2.0;
pub const PERSONA_SLIGHT_BELOW: f64 = 0.5;
pub const PERSONA_MODERATE_BELOW: f64 = 1.5;

// --- Weights ---
/// Allowed deviation of a persona's weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "VERDICT_LOG";
