//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; drafting is delegated to ProposalService.

use bid_winner::adapters::ai::{MockCompletionAdapter, OpenAiAdapter};
use bid_winner::adapters::ui::tui::{TuiCredentialPrompt, TuiInputPort};
use bid_winner::ports::{CompletionPort, CredentialPort, InputPort};
use bid_winner::shared::config::AppConfig;
use bid_winner::usecases::{CredentialService, ProposalService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Default to warn: info lines would interleave with the interactive prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    bid_winner::adapters::ui::init_ui();

    // --- Completion provider ---
    let completion: Arc<dyn CompletionPort> = if cfg.is_mock() {
        warn!("BID_WINNER_MOCK is set, using mock completion adapter (no API calls)");
        Arc::new(MockCompletionAdapter::new())
    } else {
        info!(
            model = %cfg.model_or_default(),
            url = %cfg.api_url_or_default(),
            "using OpenAI-compatible adapter"
        );
        Arc::new(OpenAiAdapter::new(cfg.api_url_or_default()))
    };

    // --- Credential: secret store first, password prompt as fallback ---
    let entry: Arc<dyn CredentialPort> = Arc::new(TuiCredentialPrompt);
    let preset = cfg.api_key();
    if preset.is_some() {
        info!("API key is pre-provisioned (config/env)");
    } else {
        info!("no pre-provisioned API key; will prompt");
    }
    let credentials = CredentialService::new(preset, entry);

    // --- Services ---
    let proposal_service = Arc::new(ProposalService::new(completion, cfg.model_or_default()));

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(Arc::clone(&proposal_service), credentials));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
