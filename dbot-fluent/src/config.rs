//! Minimal config: token, API URL, log path and a default per-request timeout.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE, REQUEST_TIMEOUT_SECS.

use std::env;
use std::time::Duration;

use anyhow::Result;
use dbot_core::RequestOptions;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl TelegramConfig {
    /// BOT_TOKEN is required; the rest are optional. An unparsable REQUEST_TIMEOUT_SECS is ignored.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            request_timeout_secs,
        })
    }

    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
            request_timeout_secs: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// teloxide bot pointed at the configured API server.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        self.validate()?;
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.telegram_api_url {
            Some(ref url_str) => bot.set_api_url(reqwest::Url::parse(url_str)?),
            None => bot,
        })
    }

    /// Options every [`crate::Context`] built with this config should start from.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            api_url: None,
        }
    }
}
