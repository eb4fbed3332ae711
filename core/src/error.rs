use thiserror::Error;

/// Error kinds surfaced to the CLI; each aborts the current triple with a
/// nonzero exit and a diagnostic. Local recovery is never attempted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("argument error: {0}")]
    ArgumentError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("unsatisfiable input: {0}")]
    UnsatisfiableInput(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("codec error: {0}")]
    CodecError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
