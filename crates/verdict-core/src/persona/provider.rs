//! WeightProvider trait.
//!
//! Standalone use relies on the built-in persona tables. A config file can
//! replace individual persona tables through `ConfiguredWeightProvider`.

use std::collections::BTreeMap;

use super::{Persona, PersonaWeights};
use crate::errors::ConfigError;

/// Source of persona weight tables.
pub trait WeightProvider: Send + Sync {
    /// Weights for `persona`. Defaults to the built-in table.
    fn weights(&self, persona: Persona) -> PersonaWeights {
        persona.default_weights()
    }
}

/// Built-in tables only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWeightProvider;

impl WeightProvider for StaticWeightProvider {}

/// Built-in tables with validated per-persona overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredWeightProvider {
    overrides: BTreeMap<Persona, PersonaWeights>,
}

impl ConfiguredWeightProvider {
    /// Validate every override before accepting it.
    pub fn new(overrides: BTreeMap<Persona, PersonaWeights>) -> Result<Self, ConfigError> {
        for (persona, weights) in &overrides {
            weights.validate(&format!("personas.{persona}"))?;
        }
        Ok(Self { overrides })
    }

    pub fn has_override(&self, persona: Persona) -> bool {
        self.overrides.contains_key(&persona)
    }
}

impl WeightProvider for ConfiguredWeightProvider {
    fn weights(&self, persona: Persona) -> PersonaWeights {
        self.overrides
            .get(&persona)
            .copied()
            .unwrap_or_else(|| persona.default_weights())
    }
}
