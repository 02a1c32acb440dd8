use thiserror::Error;

/// Top-level failures. Everything recoverable inside the pipeline surfaces
/// as data instead; only input and configuration problems reject the call.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error(transparent)]
    Spec(#[from] vellum_spec::SpecError),
}
