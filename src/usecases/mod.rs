//! Application use cases. Orchestrate domain logic via ports.

pub mod credential_service;
pub mod proposal_service;
pub mod session;

pub use credential_service::CredentialService;
pub use proposal_service::ProposalService;
pub use session::Session;
