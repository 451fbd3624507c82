//! Proposal service: validate -> compose -> execute, one request at a time.
//!
//! Owns the in-flight phase flag. A second call while one is running fails with
//! `DomainError::Busy`; there is no queue.

use crate::domain::prompt::compose;
use crate::domain::validation::validate;
use crate::domain::{
    CompletionRequest, Credential, DomainError, ProposalRequest, ProposalResult, SessionState,
};
use crate::ports::CompletionPort;
use crate::shared::config::SAMPLING_TEMPERATURE;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{info, warn};

const PHASE_READY: u8 = 0;
const PHASE_VALIDATING: u8 = 1;
const PHASE_EXECUTING: u8 = 2;

/// Resets the phase to Ready on every exit path, including panics in the adapter.
struct PhaseGuard<'a>(&'a AtomicU8);

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.0.store(PHASE_READY, Ordering::SeqCst);
    }
}

pub struct ProposalService {
    completion: Arc<dyn CompletionPort>,
    model: String,
    phase: AtomicU8,
}

impl ProposalService {
    /// # Arguments
    /// * `completion` - Completion port implementation (OpenAI, Mock, etc.)
    /// * `model` - Model identifier sent with every request
    pub fn new(completion: Arc<dyn CompletionPort>, model: String) -> Self {
        Self {
            completion,
            model,
            phase: AtomicU8::new(PHASE_READY),
        }
    }

    /// Current phase. Never `AwaitingCredential`; that belongs to the session.
    pub fn phase(&self) -> SessionState {
        match self.phase.load(Ordering::SeqCst) {
            PHASE_VALIDATING => SessionState::Validating,
            PHASE_EXECUTING => SessionState::Executing,
            _ => SessionState::Ready,
        }
    }

    /// Draft a proposal for `request`.
    ///
    /// Blank inputs are rejected before any provider call. Provider failures are
    /// returned, never retried.
    pub async fn generate(
        &self,
        credential: &Credential,
        request: &ProposalRequest,
    ) -> Result<ProposalResult, DomainError> {
        if self
            .phase
            .compare_exchange(
                PHASE_READY,
                PHASE_VALIDATING,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_err()
        {
            warn!("generate called while a request is in flight");
            return Err(DomainError::Busy);
        }
        let _guard = PhaseGuard(&self.phase);

        validate(request)?;

        let completion_request =
            CompletionRequest::from_prompt(&self.model, SAMPLING_TEMPERATURE, compose(request));

        self.phase.store(PHASE_EXECUTING, Ordering::SeqCst);
        info!(
            tone = %request.tone,
            length = %request.length,
            job_len = request.job_description.len(),
            skills_len = request.skills.len(),
            "drafting proposal"
        );

        match self.completion.complete(credential, &completion_request).await {
            Ok(text) => {
                info!(text_len = text.len(), "proposal drafted");
                Ok(ProposalResult { text })
            }
            Err(e) => {
                warn!(error = %e, "proposal generation failed");
                Err(e)
            }
        }
    }
}
