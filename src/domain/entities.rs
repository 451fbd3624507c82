//! Domain entities. Pure data structures for proposal drafting.
//!
//! No HTTP/terminal types here; adapters map to and from these.

use serde::Serialize;
use std::fmt;

/// Writing tone requested for the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    ProfessionalDirect,
    PersuasiveSalesy,
    CasualConfident,
}

impl Tone {
    /// All tones in menu order.
    pub const ALL: [Tone; 3] = [
        Tone::ProfessionalDirect,
        Tone::PersuasiveSalesy,
        Tone::CasualConfident,
    ];

    /// Label embedded verbatim in the system prompt.
    pub fn label(self) -> &'static str {
        match self {
            Tone::ProfessionalDirect => "Professional & Direct",
            Tone::PersuasiveSalesy => "Persuasive & Salesy",
            Tone::CasualConfident => "Casual & Confident",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target length of the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseLength {
    TweetSized,
    ShortParagraph,
    DetailedLetter,
}

impl ResponseLength {
    /// All lengths from shortest to longest.
    pub const ALL: [ResponseLength; 3] = [
        ResponseLength::TweetSized,
        ResponseLength::ShortParagraph,
        ResponseLength::DetailedLetter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponseLength::TweetSized => "Tweet Sized",
            ResponseLength::ShortParagraph => "Short Paragraph",
            ResponseLength::DetailedLetter => "Detailed Letter",
        }
    }
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One proposal request as entered by the user. Created fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    pub job_description: String,
    pub skills: String,
    pub tone: Tone,
    pub length: ResponseLength,
}

impl ProposalRequest {
    pub fn new(
        job_description: impl Into<String>,
        skills: impl Into<String>,
        tone: Tone,
        length: ResponseLength,
    ) -> Self {
        Self {
            job_description: job_description.into(),
            skills: skills.into(),
            tone,
            length,
        }
    }
}

/// Where the credential came from. Display only; the core treats both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Pre-provisioned (config file, env, `.env`).
    SecretStore,
    /// Typed in by the user at the password prompt.
    UserEntry,
}

/// Opaque bearer credential for the provider.
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    source: CredentialSource,
}

impl Credential {
    /// Returns `None` for an empty or whitespace-only key. Otherwise the key is kept as given.
    pub fn new(api_key: impl Into<String>, source: CredentialSource) -> Option<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self { api_key, source })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// System and user messages rendered from a [`ProposalRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

/// Chat role of a completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

/// Everything the executor needs besides the credential.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f64,
}

impl CompletionRequest {
    /// Two-message conversation: system first, then user.
    pub fn from_prompt(model: impl Into<String>, temperature: f64, prompt: ComposedPrompt) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                CompletionMessage {
                    role: Role::System,
                    content: prompt.system,
                },
                CompletionMessage {
                    role: Role::User,
                    content: prompt.user,
                },
            ],
            temperature,
        }
    }
}

/// Generated proposal text, exactly as the provider returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalResult {
    pub text: String,
}

/// Where the session is in the draft cycle.
///
/// `AwaitingCredential -> Ready -> Validating -> Executing -> Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCredential,
    Ready,
    Validating,
    Executing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_display_matches_label() {
        for tone in Tone::ALL {
            assert_eq!(tone.to_string(), tone.label());
        }
        assert_eq!(Tone::CasualConfident.to_string(), "Casual & Confident");
    }

    #[test]
    fn test_length_labels() {
        assert_eq!(ResponseLength::TweetSized.to_string(), "Tweet Sized");
        assert_eq!(ResponseLength::DetailedLetter.label(), "Detailed Letter");
    }

    #[test]
    fn test_credential_rejects_blank_and_redacts_debug() {
        assert!(Credential::new("   ", CredentialSource::UserEntry).is_none());
        let cred = Credential::new("sk-secret", CredentialSource::SecretStore).unwrap();
        assert_eq!(cred.api_key(), "sk-secret");
        let dbg = format!("{:?}", cred);
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("redacted"));
    }

    #[test]
    fn test_credential_key_is_kept_as_given() {
        let cred = Credential::new(" sk-padded\n", CredentialSource::UserEntry).unwrap();
        assert_eq!(cred.api_key(), " sk-padded\n");
    }

    #[test]
    fn test_completion_request_orders_messages() {
        let req = CompletionRequest::from_prompt(
            "gpt-4o",
            0.7,
            ComposedPrompt {
                system: "sys".into(),
                user: "usr".into(),
            },
        );
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, "sys");
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[1].content, "usr");
    }
}
