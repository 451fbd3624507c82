//! Credential resolution: pre-provisioned secret first, then interactive entry.
//!
//! The key is not verified here; a bad key surfaces on the first provider call.

use crate::domain::{Credential, CredentialSource, DomainError};
use crate::ports::CredentialPort;
use std::sync::Arc;
use tracing::info;

pub struct CredentialService {
    preset: Option<String>,
    entry: Arc<dyn CredentialPort>,
}

impl CredentialService {
    /// # Arguments
    /// * `preset` - Key from config/env/.env, if any
    /// * `entry` - Interactive fallback (password prompt)
    pub fn new(preset: Option<String>, entry: Arc<dyn CredentialPort>) -> Self {
        Self { preset, entry }
    }

    /// Pre-provisioned credential, without prompting.
    pub fn preset_credential(&self) -> Option<Credential> {
        self.preset
            .as_deref()
            .and_then(|key| Credential::new(key, CredentialSource::SecretStore))
    }

    /// Resolve a credential. Returns `MissingCredential` when nothing usable was entered.
    pub async fn resolve(&self) -> Result<Credential, DomainError> {
        if let Some(credential) = self.preset_credential() {
            info!("using pre-provisioned API key");
            return Ok(credential);
        }
        let entered = self.entry.request_api_key().await?;
        entered
            .and_then(|key| Credential::new(key, CredentialSource::UserEntry))
            .ok_or(DomainError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedEntry {
        answer: Option<String>,
        asked: AtomicUsize,
    }

    impl ScriptedEntry {
        fn new(answer: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                answer: answer.map(str::to_string),
                asked: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl CredentialPort for ScriptedEntry {
        async fn request_api_key(&self) -> Result<Option<String>, DomainError> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.clone())
        }
    }

    #[tokio::test]
    async fn test_preset_wins_without_prompting() {
        let entry = ScriptedEntry::new(Some("sk-typed"));
        let service = CredentialService::new(Some("sk-preset".into()), entry.clone());

        let cred = service.resolve().await.unwrap();

        assert_eq!(cred.api_key(), "sk-preset");
        assert_eq!(cred.source(), CredentialSource::SecretStore);
        assert_eq!(entry.asked.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_user_entry() {
        let entry = ScriptedEntry::new(Some("sk-typed"));
        let service = CredentialService::new(None, entry.clone());

        let cred = service.resolve().await.unwrap();

        assert_eq!(cred.api_key(), "sk-typed");
        assert_eq!(cred.source(), CredentialSource::UserEntry);
        assert_eq!(entry.asked.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_entry_is_missing_credential() {
        let service = CredentialService::new(Some("  ".into()), ScriptedEntry::new(Some("")));
        assert_eq!(
            service.resolve().await.unwrap_err(),
            DomainError::MissingCredential
        );

        let service = CredentialService::new(None, ScriptedEntry::new(None));
        assert_eq!(
            service.resolve().await.unwrap_err(),
            DomainError::MissingCredential
        );
    }
}
