//! Persona-specific winners and their justifications.

use std::str::FromStr;

use verdict_core::constants::{PERSONA_MODERATE_BELOW, PERSONA_SLIGHT_BELOW};
use verdict_core::{Confidence, Persona, PersonaWeights, PersonaWinner, Side, ToolRecord};

use crate::composite::calculate_tool_score;
use crate::scorers::mentions;
use crate::winner::pick_side;

/// Reason returned for a persona name that has no weight table.
pub const UNKNOWN_PERSONA_REASON: &str = "No specific persona weights";

/// One step of a reason cascade, checked against the winning tool.
struct ReasonRule {
    applies: fn(&ToolRecord) -> bool,
    reason: &'static str,
}

/// A persona's ordered reason rules plus its generic fallback.
struct ReasonCascade {
    rules: &'static [ReasonRule],
    fallback: &'static str,
}

fn has_free_pricing(tool: &ToolRecord) -> bool {
    mentions(tool.pricing.as_deref(), "free")
}

fn is_easy_to_use(tool: &ToolRecord) -> bool {
    mentions(tool.ease_of_use.as_deref(), "easy")
}

fn has_high_reliability(tool: &ToolRecord) -> bool {
    mentions(tool.reliability.as_deref(), "high")
}

fn has_comprehensive_docs(tool: &ToolRecord) -> bool {
    mentions(tool.documentation.as_deref(), "comprehensive")
}

fn is_open_source(tool: &ToolRecord) -> bool {
    tool.open_source
}

static STARTUP: ReasonCascade = ReasonCascade {
    rules: &[
        ReasonRule {
            applies: has_free_pricing,
            reason: "Free tier available for early-stage development",
        },
        ReasonRule {
            applies: is_easy_to_use,
            reason: "Easy to set up and start building quickly",
        },
    ],
    fallback: "Better balance of features and cost for startups",
};

static ENTERPRISE: ReasonCascade = ReasonCascade {
    rules: &[
        ReasonRule {
            applies: has_high_reliability,
            reason: "Proven reliability for production environments",
        },
        ReasonRule {
            applies: has_comprehensive_docs,
            reason: "Comprehensive documentation for team adoption",
        },
    ],
    fallback: "Enterprise-grade features and support",
};

static LEARNING: ReasonCascade = ReasonCascade {
    rules: &[
        ReasonRule {
            applies: is_open_source,
            reason: "Open source allows deep understanding of the technology",
        },
        ReasonRule {
            applies: has_free_pricing,
            reason: "Free to experiment and learn without cost barriers",
        },
    ],
    fallback: "Great for learning AI development concepts",
};

fn cascade(persona: Persona) -> &'static ReasonCascade {
    match persona {
        Persona::Startup => &STARTUP,
        Persona::Enterprise => &ENTERPRISE,
        Persona::Learning => &LEARNING,
    }
}

/// Why `winner` suits `persona`. First applicable rule wins.
pub fn persona_reason(persona: Persona, winner: &ToolRecord) -> &'static str {
    let cascade = cascade(persona);
    cascade
        .rules
        .iter()
        .find(|rule| (rule.applies)(winner))
        .map_or(cascade.fallback, |rule| rule.reason)
}

/// Persona winner looked up by name.
///
/// Names are matched case-insensitively. An unknown name does not fail:
/// it yields `a` as winner with `slight` confidence and
/// [`UNKNOWN_PERSONA_REASON`], which callers treat as a soft failure.
pub fn calculate_persona_winner(a: &ToolRecord, b: &ToolRecord, persona: &str) -> PersonaWinner {
    match Persona::from_str(persona) {
        Ok(p) => persona_winner(a, b, p),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to unweighted persona verdict");
            unknown_persona(a)
        }
    }
}

/// Persona winner using the built-in weight table.
pub fn persona_winner(a: &ToolRecord, b: &ToolRecord, persona: Persona) -> PersonaWinner {
    persona_winner_with_weights(a, b, persona, &persona.default_weights())
}

/// Persona winner with an explicit weight table. Ties go to `a`.
pub fn persona_winner_with_weights(
    a: &ToolRecord,
    b: &ToolRecord,
    persona: Persona,
    weights: &PersonaWeights,
) -> PersonaWinner {
    let score_a = calculate_tool_score(a, weights);
    let score_b = calculate_tool_score(b, weights);
    let gap = (score_a - score_b).abs();
    let side = pick_side(score_a, score_b);
    let winner = side.pick(a, b);

    PersonaWinner {
        winner: winner.name.clone(),
        side,
        confidence: Confidence::from_gap(gap, PERSONA_SLIGHT_BELOW, PERSONA_MODERATE_BELOW),
        reason: persona_reason(persona, winner).to_string(),
    }
}

fn unknown_persona(a: &ToolRecord) -> PersonaWinner {
    PersonaWinner {
        winner: a.name.clone(),
        side: Side::A,
        confidence: Confidence::Slight,
        reason: UNKNOWN_PERSONA_REASON.to_string(),
    }
}
