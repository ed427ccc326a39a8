use verdict_core::config::EngineConfig;
use verdict_core::constants::{DEFAULT_DIFFERENCE_THRESHOLD, DEFAULT_MAX_REASONS};
use verdict_core::errors::VerdictResult;
use verdict_core::{
    KeyDifference, OverallWinner, Persona, PersonaWeights, PersonaWinner, ScoreBreakdown,
    StaticWeightProvider, ToolRecord, Verdict, VerdictConfig, WeightProvider,
};

use crate::assembly;
use crate::composite;
use crate::differences;
use crate::persona;
use crate::winner;

/// Tunables resolved from [`EngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// A metric gap must exceed this to become a key difference.
    pub difference_threshold: f64,
    /// Maximum reasons attached to a verdict.
    pub max_reasons: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            difference_threshold: DEFAULT_DIFFERENCE_THRESHOLD,
            max_reasons: DEFAULT_MAX_REASONS,
        }
    }
}

impl From<&EngineConfig> for EngineSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            difference_threshold: config.effective_difference_threshold(),
            max_reasons: config.effective_max_reasons(),
        }
    }
}

/// Stateless comparison service.
///
/// Holds only read-only configuration, so one instance can be shared
/// across request handlers without locking. The free functions in this
/// crate behave like `VerdictEngine::default()`.
pub struct VerdictEngine {
    provider: Box<dyn WeightProvider>,
    settings: EngineSettings,
}

impl VerdictEngine {
    /// Built-in persona tables and default settings.
    pub fn new() -> Self {
        Self::with_provider(Box::new(StaticWeightProvider), EngineSettings::default())
    }

    pub fn with_provider(provider: Box<dyn WeightProvider>, settings: EngineSettings) -> Self {
        Self { provider, settings }
    }

    /// Build from a config, validating persona overrides and engine settings.
    pub fn from_config(config: &VerdictConfig) -> VerdictResult<Self> {
        config.validate()?;
        let provider = config.weight_provider()?;
        Ok(Self::with_provider(
            Box::new(provider),
            EngineSettings::from(&config.engine),
        ))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn weights(&self, persona: Persona) -> PersonaWeights {
        self.provider.weights(persona)
    }

    /// Composite score of `tool` for `persona`.
    pub fn tool_score(&self, tool: &ToolRecord, persona: Persona) -> f64 {
        composite::calculate_tool_score(tool, &self.weights(persona))
    }

    /// Per-metric scores and composite of `tool` for `persona`.
    pub fn breakdown(&self, tool: &ToolRecord, persona: Persona) -> ScoreBreakdown {
        let _span = crate::score_span!(tool.name, persona).entered();
        composite::score_breakdown(tool, &self.weights(persona))
    }

    pub fn key_differences(&self, a: &ToolRecord, b: &ToolRecord) -> Vec<KeyDifference> {
        differences::key_differences_with_threshold(a, b, self.settings.difference_threshold)
    }

    pub fn overall_winner(&self, a: &ToolRecord, b: &ToolRecord) -> OverallWinner {
        winner::overall_winner_with_weights(a, b, &self.weights(Persona::OVERALL_LENS))
    }

    /// Persona winner by name. Unknown names yield the soft-failure sentinel.
    pub fn persona_winner(&self, a: &ToolRecord, b: &ToolRecord, persona: &str) -> PersonaWinner {
        match persona.parse::<Persona>() {
            Ok(p) => persona::persona_winner_with_weights(a, b, p, &self.weights(p)),
            Err(_) => persona::calculate_persona_winner(a, b, persona),
        }
    }

    pub fn generate_verdict(&self, a: &ToolRecord, b: &ToolRecord) -> Verdict {
        let _span = crate::verdict_span!(a.name, b.name).entered();
        assembly::assemble(a, b, self.provider.as_ref(), &self.settings)
    }

    pub fn resolve_verdict(
        &self,
        precomputed: Option<Verdict>,
        a: &ToolRecord,
        b: &ToolRecord,
    ) -> Verdict {
        precomputed.unwrap_or_else(|| self.generate_verdict(a, b))
    }
}

impl Default for VerdictEngine {
    fn default() -> Self {
        Self::new()
    }
}
