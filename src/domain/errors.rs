//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No credential connected; nothing is validated or sent.
    #[error("Missing credential: waiting for API connection")]
    MissingCredential,

    #[error("Missing data: {0}")]
    MissingInput(String),

    /// Transport, auth, rate-limit or malformed-response failure from the provider.
    #[error("Provider failure: {0}")]
    Provider(String),

    /// Another proposal is still in flight. Requests are never queued.
    #[error("A proposal is already being generated")]
    Busy,

    #[error("UI error: {0}")]
    Ui(String),
}

/// Failure class, for callers that branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    MissingInput,
    ProviderFailure,
    Busy,
    Ui,
}

impl DomainError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DomainError::MissingCredential => FailureKind::MissingCredential,
            DomainError::MissingInput(_) => FailureKind::MissingInput,
            DomainError::Provider(_) => FailureKind::ProviderFailure,
            DomainError::Busy => FailureKind::Busy,
            DomainError::Ui(_) => FailureKind::Ui,
        }
    }
}
