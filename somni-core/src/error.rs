//! Common error types for the Somni personalization engine

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced at the engine boundary
///
/// The engine is pure arithmetic over closed enumerations, so every error
/// indicates a caller bug (an incomplete questionnaire flow, or a corrupt
/// value read back from storage). Nothing here is retryable.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Persona value outside the three recognized personas
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Chronotype value outside the four recognized chronotypes
    #[error("Unknown chronotype: {0}")]
    UnknownChronotype(String),

    /// Answer code outside the questionnaire option range
    #[error("Unknown answer option: {0}")]
    UnknownAnswer(String),
}
