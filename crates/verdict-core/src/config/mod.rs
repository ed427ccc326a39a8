//! Configuration system for Verdict.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod engine_config;
pub mod observability_config;
pub mod verdict_config;

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use verdict_config::VerdictConfig;
