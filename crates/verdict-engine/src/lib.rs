//! # verdict-engine
//!
//! Opinionated, deterministic comparison of two tools.
//! Five keyword-rule scorers (pricing, ease, docs, community, reliability)
//! feed persona-weighted composites, which decide an overall winner, the
//! per-persona recommendations, and the ranked reasons behind them.
//!
//! Every function here is pure: identical inputs give identical output.

pub mod assembly;
pub mod composite;
pub mod differences;
pub mod engine;
pub mod persona;
pub mod scorers;
pub mod spans;
pub mod winner;

pub use assembly::{generate_verdict, resolve_verdict};
pub use composite::{calculate_tool_score, score_breakdown};
pub use differences::calculate_key_differences;
pub use engine::{EngineSettings, VerdictEngine};
pub use persona::{calculate_persona_winner, persona_winner};
pub use winner::{determine_overall_winner, generate_headline};
