//! Implements InputPort and CredentialPort. Inquire-based interactive prompts.
//!
//! Loop: connect -> tone/length -> job post + skills -> draft -> edit -> again?

use crate::domain::{
    CredentialSource, DomainError, ProposalRequest, ProposalResult, ResponseLength, SessionState,
    Tone,
};
use crate::ports::{CredentialPort, InputPort};
use crate::usecases::{CredentialService, ProposalService, Session};
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireResult;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, Editor, InquireError, Password, PasswordDisplayMode, Select};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("⚡").with_fg(Color::LightRed))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightYellow))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Ctrl-C / Esc become `Ok(None)` so the caller can quit cleanly.
fn answer<T>(result: InquireResult<T>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.red} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Password prompt for the API key.
pub struct TuiCredentialPrompt;

#[async_trait]
impl CredentialPort for TuiCredentialPrompt {
    async fn request_api_key(&self) -> Result<Option<String>, DomainError> {
        let key = answer(
            Password::new("Enter API Key:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .with_help_message("Kept in memory for this session only")
                .prompt(),
        )?;
        Ok(key.filter(|k| !k.trim().is_empty()))
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<ProposalService>,
    credentials: CredentialService,
}

impl TuiInputPort {
    pub fn new(service: Arc<ProposalService>, credentials: CredentialService) -> Self {
        Self {
            service,
            credentials,
        }
    }

    /// Connect a credential. Returns false when the user gives up.
    async fn connect(&self, session: &mut Session) -> Result<bool, DomainError> {
        loop {
            println!(
                "{}",
                "⚠️  Waiting for API connection...".yellow()
            );
            match self.credentials.resolve().await {
                Ok(credential) => {
                    let label = match credential.source() {
                        CredentialSource::SecretStore => "secret store",
                        CredentialSource::UserEntry => "manual entry",
                    };
                    println!(
                        "{}",
                        format!("✅ AI server connected ({})", label).green()
                    );
                    session.connect(credential);
                    return Ok(true);
                }
                Err(DomainError::MissingCredential) => {
                    let retry = answer(
                        Confirm::new("No API key entered. Try again?")
                            .with_default(true)
                            .prompt(),
                    )?;
                    if retry != Some(true) {
                        return Ok(false);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the draft, let the user edit it, then print the final text to stdout.
    fn present(&self, result: ProposalResult) -> Result<(), DomainError> {
        println!("{}", "✅ Mission accomplished.".green());
        let edited = answer(
            Editor::new("Your winning proposal is ready. Edit it before copying?")
                .with_predefined_text(&result.text)
                .with_file_extension(".md")
                .with_help_message("Opens $EDITOR; Esc keeps the draft as is")
                .prompt(),
        )?;
        let text = edited.unwrap_or(result.text);
        println!("\n{}\n", "📋 Your winning proposal".bold());
        println!("{}", text);
        println!();
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut session = Session::new(Arc::clone(&self.service));
        let mut last_skills = String::new();

        loop {
            if session.state() == SessionState::AwaitingCredential
                && !self.connect(&mut session).await?
            {
                return Ok(());
            }

            let Some(tone) = answer(Select::new("Tone Strategy", Tone::ALL.to_vec()).prompt())?
            else {
                return Ok(());
            };
            let Some(length) = answer(
                Select::new("Response Length", ResponseLength::ALL.to_vec())
                    .with_starting_cursor(1)
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            let Some(job) = answer(
                Editor::new("1. The client's need (job post):")
                    .with_help_message("Paste the job post in your editor, save and close")
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            let Some(skills) = answer(
                Editor::new("2. Your weapon (resume/skills):")
                    .with_predefined_text(&last_skills)
                    .with_help_message("Paste your resume summary or skills list")
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            last_skills = skills.clone();

            let request = ProposalRequest::new(job, skills, tone, length);
            let pb = spinner("Analyzing job metrics... drafting proposal");
            let outcome = session.generate(&request).await;
            pb.finish_and_clear();

            match outcome {
                Ok(result) => self.present(result)?,
                Err(e @ DomainError::MissingInput(_)) => {
                    println!("{}", format!("⚠️  Tactical error: {}", e).yellow());
                }
                Err(DomainError::Provider(msg)) => {
                    println!("{}", format!("❌ System failure: {}", msg).red());
                }
                Err(e) => println!("{}", format!("❌ {}", e).red()),
            }
            info!(state = ?session.state(), "draft cycle finished");

            let again = answer(
                Confirm::new("Draft another proposal?")
                    .with_default(true)
                    .prompt(),
            )?;
            if again != Some(true) {
                return Ok(());
            }
        }
    }
}
