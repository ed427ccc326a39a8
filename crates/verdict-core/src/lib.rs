//! # verdict-core
//!
//! Foundation crate for the Verdict comparison engine.
//! Defines the tool/verdict model, persona weight tables, errors, config,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod persona;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::VerdictConfig;
pub use errors::{ConfigError, PersonaError, VerdictError, VerdictResult};
pub use model::{
    Confidence, KeyDifference, Metric, OverallWinner, PersonaWinner, Reason, ReasonMetric,
    Recommendations, ScoreBreakdown, Sentiment, Side, ToolRecord, Verdict,
};
pub use persona::{
    ConfiguredWeightProvider, Persona, PersonaWeights, StaticWeightProvider, WeightProvider,
};
