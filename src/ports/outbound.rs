//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CompletionRequest, Credential, DomainError};

/// Chat-completion provider. One blocking round trip per call, no retry.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send `request` authorized by `credential` and return the first choice's
    /// content unmodified.
    ///
    /// # Errors
    /// Every transport, auth, rate-limit or malformed-response condition maps to
    /// `DomainError::Provider` carrying the underlying message.
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, DomainError>;
}

/// Interactive credential entry. Used when no secret is pre-provisioned.
#[async_trait::async_trait]
pub trait CredentialPort: Send + Sync {
    /// Ask the user for an API key. `Ok(None)` means nothing was entered.
    async fn request_api_key(&self) -> Result<Option<String>, DomainError>;
}
