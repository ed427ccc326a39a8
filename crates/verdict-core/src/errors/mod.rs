//! Error handling for Verdict.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod persona_error;

pub use config_error::ConfigError;
pub use persona_error::PersonaError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Persona error: {0}")]
    Persona(#[from] PersonaError),
}

pub type VerdictResult<T> = Result<T, VerdictError>;
