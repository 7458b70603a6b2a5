use thiserror::Error;

/// Failure reported by a producto command or query handler.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
