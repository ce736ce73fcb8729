use anyhow::{Context, Result};

pub const DEFAULT_CEREBRAS_BASE_URL: &str = "https://api.cerebras.ai/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if the upstream API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub cerebras_api_key: String,
    pub cerebras_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            cerebras_api_key: require_var(&lookup, "CEREBRAS_API_KEY")?,
            cerebras_base_url: lookup("CEREBRAS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_CEREBRAS_BASE_URL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
