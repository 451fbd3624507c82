//! Core domain layer. No external I/O dependencies.
//!
//! Entities, prompt composition and input validation live here.

pub mod entities;
pub mod errors;
pub mod prompt;
pub mod validation;

pub use entities::{
    ComposedPrompt, CompletionMessage, CompletionRequest, Credential, CredentialSource,
    ProposalRequest, ProposalResult, ResponseLength, Role, SessionState, Tone,
};
pub use errors::{DomainError, FailureKind};
