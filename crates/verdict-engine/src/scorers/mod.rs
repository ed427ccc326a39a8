//! Metric scorers: free-text descriptor → score in [0, 10].
//!
//! Each metric has an ordered rule table. A descriptor is lowercased and
//! checked against the rules in order; the first rule with any keyword
//! contained in the descriptor wins. Order matters for overlapping keywords
//! ("free and open source" is "free", "very easy" is not plain "easy").
//! Absent or unmatched descriptors score neutral.

pub mod community;
pub mod docs;
pub mod ease;
pub mod pricing;
pub mod reliability;

use verdict_core::constants::{MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
use verdict_core::{Metric, ToolRecord};

/// One classification rule: any of `keywords` (lowercase) ⇒ `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub score: f64,
}

impl Rule {
    pub const fn new(keywords: &'static [&'static str], score: f64) -> Self {
        Self { keywords, score }
    }

    /// `text` must already be lowercase.
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Score `descriptor` against `rules`, first match wins.
pub fn evaluate(descriptor: Option<&str>, rules: &[Rule]) -> f64 {
    let Some(text) = descriptor else {
        return NEUTRAL_SCORE;
    };
    let text = text.to_lowercase();

    rules
        .iter()
        .find(|rule| rule.matches(&text))
        .map_or(NEUTRAL_SCORE, |rule| rule.score)
        .clamp(MIN_SCORE, MAX_SCORE)
}

/// Score a single metric of `tool`.
pub fn score_metric(tool: &ToolRecord, metric: Metric) -> f64 {
    match metric {
        Metric::Pricing => pricing::calculate(tool),
        Metric::Ease => ease::calculate(tool),
        Metric::Docs => docs::calculate(tool),
        Metric::Community => community::calculate(tool),
        Metric::Reliability => reliability::calculate(tool),
    }
}

/// Rule table for `metric`. Reliability's open-source short-circuit is not a rule.
pub fn rules(metric: Metric) -> &'static [Rule] {
    match metric {
        Metric::Pricing => pricing::RULES,
        Metric::Ease => ease::RULES,
        Metric::Docs => docs::RULES,
        Metric::Community => community::RULES,
        Metric::Reliability => reliability::RULES,
    }
}

/// Case-insensitive substring check on an optional descriptor.
pub(crate) fn mentions(descriptor: Option<&str>, needle: &str) -> bool {
    descriptor.is_some_and(|text| text.to_lowercase().contains(needle))
}
