/// Persona lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error("unknown persona: {name}")]
    Unknown { name: String },
}
