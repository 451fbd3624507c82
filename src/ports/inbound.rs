//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the proposal session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop (connect, collect inputs, generate, show result).
    /// Returns when the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
