//! Application configuration. Provider endpoint, model, credential.

use serde::Deserialize;

/// Default OpenAI chat completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature for every proposal request. Not configurable.
pub const SAMPLING_TEMPERATURE: f64 = 0.7;

/// Conventional OpenAI key variable, honored as a pre-provisioned secret.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Provider API key. Read from BID_WINNER_API_KEY, falling back to OPENAI_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat completions URL. Read from BID_WINNER_API_URL. Any OpenAI-compatible endpoint works.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Defaults to "gpt-4o". Read from BID_WINNER_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Use the offline mock adapter instead of a real provider. Read from BID_WINNER_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("BID_WINNER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Env wins over the file.
        c = c.add_source(config::Environment::with_prefix("BID_WINNER").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Parse a TOML document. Used for config files passed around in memory.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Returns the pre-provisioned API key, if any. Blank values count as unset.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_or(std::env::var(OPENAI_API_KEY_ENV).ok())
    }

    /// Configured key, else `fallback`. Blank values on either side count as unset.
    fn api_key_or(&self, fallback: Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or(fallback)
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the chat completions URL. Defaults to OpenAI.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the model name. Defaults to "gpt-4o".
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn is_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }
}
