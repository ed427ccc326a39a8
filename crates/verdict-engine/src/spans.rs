//! Span definitions per engine operation.
//!
//! Each span carries the compared tool names via the `tracing` crate.

/// Create a verdict-generation span.
#[macro_export]
macro_rules! verdict_span {
    ($tool_a:expr, $tool_b:expr) => {
        tracing::info_span!("verdict.generate", tool_a = %$tool_a, tool_b = %$tool_b)
    };
}

/// Create a single-tool scoring span.
#[macro_export]
macro_rules! score_span {
    ($tool:expr, $persona:expr) => {
        tracing::debug_span!("verdict.score", tool = %$tool, persona = %$persona)
    };
}
