//! # Domain Errors
//!
//! The four error kinds the API can report. Each kind carries a client-facing
//! message and maps to a fixed HTTP status code. Anything that is not a
//! `DomainError` is treated as unrecognized by the REST layer.

/// Client-facing error kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Malformed or invalid request input
    #[error("{0}")]
    Validation(String),
    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),
    /// Unclassified failure
    #[error("{0}")]
    Unknown(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    /// HTTP status code reported for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Unknown(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unknown(message) => message,
        }
    }

    /// Recover a `DomainError` from an error chain, or fall back to an
    /// `Unknown` error with the given message.
    pub fn classify(error: &anyhow::Error, fallback: &str) -> Self {
        match error.downcast_ref::<DomainError>() {
            Some(domain_error) => domain_error.clone(),
            None => Self::unknown(fallback),
        }
    }
}
