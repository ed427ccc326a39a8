//! Top-level Verdict configuration with 3-layer resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::observability_config::LOG_LEVELS;
use super::{EngineConfig, ObservabilityConfig};
use crate::constants::MAX_SCORE;
use crate::errors::ConfigError;
use crate::persona::{ConfiguredWeightProvider, Persona, PersonaWeights};

pub const ENV_MAX_REASONS: &str = "VERDICT_MAX_REASONS";
pub const ENV_DIFFERENCE_THRESHOLD: &str = "VERDICT_DIFFERENCE_THRESHOLD";
pub const ENV_LOG_LEVEL: &str = "VERDICT_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERDICT_*`)
/// 2. Config file (`verdict.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerdictConfig {
    pub engine: EngineConfig,
    /// Full replacement weight tables, keyed by persona name.
    pub personas: BTreeMap<Persona, PersonaWeights>,
    pub observability: ObservabilityConfig,
}

impl VerdictConfig {
    /// Load from a file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: VerdictConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            persona_overrides = config.personas.len(),
            "loaded verdict config"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults.
    /// Environment overrides apply in both cases.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let mut config = Self::default();
                config.apply_overrides(|key| std::env::var(key).ok())?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `VERDICT_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_REASONS) {
            let value = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: ENV_MAX_REASONS.to_string(),
                    message: e.to_string(),
                })?;
            self.engine.max_reasons = Some(value);
        }
        if let Some(raw) = lookup(ENV_DIFFERENCE_THRESHOLD) {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: ENV_DIFFERENCE_THRESHOLD.to_string(),
                    message: e.to_string(),
                })?;
            self.engine.difference_threshold = Some(value);
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = Some(raw.trim().to_ascii_lowercase());
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.engine.difference_threshold {
            if !threshold.is_finite() || !(0.0..=MAX_SCORE).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.difference_threshold".to_string(),
                    message: "must be between 0.0 and 10.0".to_string(),
                });
            }
        }
        if self.engine.max_reasons == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_reasons".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (persona, weights) in &self.personas {
            weights.validate(&format!("personas.{persona}"))?;
        }
        let level = self.observability.effective_log_level();
        if !LOG_LEVELS.contains(&level) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level {level:?}"),
            });
        }
        Ok(())
    }

    /// Weight provider carrying this config's persona overrides.
    pub fn weight_provider(&self) -> Result<ConfiguredWeightProvider, ConfigError> {
        ConfiguredWeightProvider::new(self.personas.clone())
    }
}
