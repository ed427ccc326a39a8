//! Input and output types for the comparison engine.

pub mod breakdown;
pub mod metric;
pub mod tool;
pub mod verdict;

pub use breakdown::ScoreBreakdown;
pub use metric::{Confidence, Metric, ReasonMetric, Sentiment, Side};
pub use tool::ToolRecord;
pub use verdict::{KeyDifference, OverallWinner, PersonaWinner, Reason, Recommendations, Verdict};
