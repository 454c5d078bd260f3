use std::fmt;
use thiserror::Error;
use tracing::info;

use crate::infrastructure::client::iss::ISS_BASE_URL;

/// Bot token variable (required)
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_TOKEN";

/// Optional ISS host override
pub const ISS_URL_ENV_VAR: &str = "MOEX_ISS_URL";

/// Chat that receives threshold alerts
pub const OWNER_CHAT_ID: i64 = 878761279;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Runtime configuration of the bot
#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot token from .env
    pub telegram_token: String,
    pub owner_chat_id: i64,
    pub iss_base_url: String,
}

impl BotConfig {
    /// Load configuration from the process environment
    ///
    /// Call after the .env file has been loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_token = lookup(TOKEN_ENV_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::EnvVarMissing(TOKEN_ENV_VAR.to_string()))?;

        let iss_base_url = lookup(ISS_URL_ENV_VAR)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| ISS_BASE_URL.to_string());

        let config = Self {
            telegram_token,
            owner_chat_id: OWNER_CHAT_ID,
            iss_base_url,
        };
        config.validate()?;

        info!("Configuration loaded (ISS: {})", config.iss_base_url);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.iss_base_url.starts_with("http://") && !self.iss_base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{} must be an http(s) URL, got {}",
                ISS_URL_ENV_VAR, self.iss_base_url
            )));
        }
        Ok(())
    }
}

// Keeps the token out of logs
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("owner_chat_id", &self.owner_chat_id)
            .field("iss_base_url", &self.iss_base_url)
            .finish()
    }
}
