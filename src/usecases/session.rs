//! Session: the credential the user connected plus the proposal service.
//!
//! Without a credential the session stays in `AwaitingCredential` and never
//! validates or executes.

use crate::domain::{Credential, DomainError, ProposalRequest, ProposalResult, SessionState};
use crate::usecases::ProposalService;
use std::sync::Arc;

pub struct Session {
    credential: Option<Credential>,
    service: Arc<ProposalService>,
}

impl Session {
    pub fn new(service: Arc<ProposalService>) -> Self {
        Self {
            credential: None,
            service,
        }
    }

    pub fn connect(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn state(&self) -> SessionState {
        match self.credential {
            None => SessionState::AwaitingCredential,
            Some(_) => self.service.phase(),
        }
    }

    /// Run one draft cycle. `MissingCredential` takes precedence over any input problem.
    pub async fn generate(&self, request: &ProposalRequest) -> Result<ProposalResult, DomainError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(DomainError::MissingCredential)?;
        self.service.generate(credential, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionAdapter;
    use crate::domain::{CredentialSource, ResponseLength, Tone};

    #[tokio::test]
    async fn test_without_credential_nothing_runs() {
        let mock = Arc::new(MockCompletionAdapter::replying("unused"));
        let session = Session::new(Arc::new(ProposalService::new(mock.clone(), "gpt-4o".into())));
        assert_eq!(session.state(), SessionState::AwaitingCredential);

        // Blank inputs too: the credential check comes first.
        for (job, skills) in [("Need a logo", "Illustrator"), ("", "")] {
            let req = ProposalRequest::new(job, skills, Tone::CasualConfident, ResponseLength::TweetSized);
            assert_eq!(
                session.generate(&req).await.unwrap_err(),
                DomainError::MissingCredential
            );
        }
        assert_eq!(mock.calls(), 0);
        assert_eq!(session.state(), SessionState::AwaitingCredential);
    }

    #[tokio::test]
    async fn test_connected_session_returns_to_ready() {
        let mock = Arc::new(MockCompletionAdapter::replying("Hi there, I noticed..."));
        let mut session =
            Session::new(Arc::new(ProposalService::new(mock.clone(), "gpt-4o".into())));
        session.connect(Credential::new("sk", CredentialSource::UserEntry).unwrap());
        assert_eq!(session.state(), SessionState::Ready);

        let req = ProposalRequest::new(
            "Need a logo designed",
            "Illustrator",
            Tone::ProfessionalDirect,
            ResponseLength::DetailedLetter,
        );
        let result = session.generate(&req).await.unwrap();

        assert_eq!(result.text, "Hi there, I noticed...");
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(mock.calls(), 1);
    }
}
