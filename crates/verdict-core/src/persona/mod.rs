//! Audience personas and their metric weight tables.

pub mod provider;
pub mod weights;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::PersonaError;

pub use provider::{ConfiguredWeightProvider, StaticWeightProvider, WeightProvider};
pub use weights::PersonaWeights;

/// A visitor audience with its own priorities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Startup,
    Enterprise,
    Learning,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Self::Startup, Self::Enterprise, Self::Learning];

    /// The persona whose weights decide the headline verdict.
    pub const OVERALL_LENS: Persona = Persona::Startup;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Enterprise => "enterprise",
            Self::Learning => "learning",
        }
    }

    /// Built-in weight table for this persona.
    pub fn default_weights(self) -> PersonaWeights {
        match self {
            Self::Startup => PersonaWeights::STARTUP,
            Self::Enterprise => PersonaWeights::ENTERPRISE,
            Self::Learning => PersonaWeights::LEARNING,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = PersonaError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| PersonaError::Unknown {
                name: s.to_string(),
            })
    }
}
