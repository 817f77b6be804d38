use thiserror::Error;

/// Failures raised by casting, assembly and annotation
#[derive(Debug, Error, PartialEq)]
pub enum DivinationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing precondition: {0}")]
    PreconditionMissing(String),

    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}
