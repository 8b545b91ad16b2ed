use std::str::FromStr;

use log::LevelFilter;
use url::Url;

use crate::types::ChatId;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const WEBAPP_URL_VAR: &str = "WEBAPP_URL";
pub const BOT_USERNAME_VAR: &str = "BOT_USERNAME";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_CHAT_ID_VAR: &str = "LOG_CHAT_ID";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const WEBHOOK_PORT_VAR: &str = "WEBHOOK_PORT";
/// Fallback for [`WEBHOOK_PORT_VAR`], set by most hostings
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_WEBAPP_URL: &str = "https://your-domain.com/faq.html";
pub const DEFAULT_BOT_USERNAME: &str = "SkillKlanBot";
pub const DEFAULT_WEBHOOK_PORT: u16 = 3000;

pub const IS_PROD: bool = cfg!(feature = "prod");
pub const DEFAULT_LOG_LEVEL: LevelFilter = if IS_PROD {
    LevelFilter::Error
} else {
    LevelFilter::Debug
};

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    bot_token: String,
    webapp_url: Url,
    bot_username: String,
    log_level: LevelFilter,
    log_chat_id: Option<ChatId>,
    webhook: Option<Webhook>,
}

/// Receive updates with a webhook instead of long polling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    /// Public url telegram posts updates to
    pub url: Url,
    /// Local port to listen on
    pub port: u16,
}

impl Config {
    /// Load `.env` (if present) and read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotEnv(e));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Read configuration with a custom variable source. Empty values are
    /// treated as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = var(BOT_TOKEN_VAR).ok_or(ConfigError::MissingToken)?;
        if !is_valid_token(&bot_token) {
            return Err(ConfigError::InvalidToken);
        }

        let webapp_url = var(WEBAPP_URL_VAR).unwrap_or(DEFAULT_WEBAPP_URL.to_string());
        let webapp_url = Url::parse(&webapp_url).map_err(|source| ConfigError::InvalidWebAppUrl {
            url: webapp_url,
            source,
        })?;

        let log_level = match var(LOG_LEVEL_VAR) {
            Some(level) => LevelFilter::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => DEFAULT_LOG_LEVEL,
        };

        let log_chat_id = var(LOG_CHAT_ID_VAR)
            .map(|id| id.parse::<i64>().map(ChatId).map_err(|_| ConfigError::InvalidLogChatId(id)))
            .transpose()?;

        let webhook = match var(WEBHOOK_URL_VAR) {
            Some(url) => {
                let url = Url::parse(&url).map_err(|source| ConfigError::InvalidWebhookUrl { url, source })?;
                let port = match var(WEBHOOK_PORT_VAR).or_else(|| var(PORT_VAR)) {
                    Some(port) => port.parse().map_err(|_| ConfigError::InvalidWebhookPort(port))?,
                    None => DEFAULT_WEBHOOK_PORT,
                };
                Some(Webhook { url, port })
            }
            None => None,
        };

        Ok(Self {
            bot_token,
            webapp_url,
            bot_username: var(BOT_USERNAME_VAR).unwrap_or(DEFAULT_BOT_USERNAME.to_string()),
            log_level,
            log_chat_id,
            webhook,
        })
    }
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    pub fn webapp_url(&self) -> &Url {
        &self.webapp_url
    }
    /// Bot handle without leading `@`
    pub fn bot_username(&self) -> &str {
        self.bot_username.trim_start_matches('@')
    }
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
    pub fn log_chat_id(&self) -> Option<ChatId> {
        self.log_chat_id
    }
    /// `None` means long polling
    pub fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }
    /// Token safe for logs: `123456789:********...wxyz`
    pub fn masked_token(&self) -> String {
        let Some((id, secret)) = self.bot_token.split_once(':') else {
            return "********".to_string();
        };
        let tail_start = secret.char_indices().rev().nth(3).map_or(0, |(i, _)| i);
        format!("{id}:********...{}", &secret[tail_start..])
    }
}

/// Token issued by @BotFather: `<numeric bot id>:<secret>`
fn is_valid_token(token: &str) -> bool {
    let Some((id, secret)) = token.split_once(':') else {
        return false;
    };
    !id.is_empty()
        && id.chars().all(|c| c.is_ascii_digit())
        && !secret.is_empty()
        && secret.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN is not set, get one from @BotFather")]
    MissingToken,
    #[error("BOT_TOKEN has invalid format, expected <bot id>:<secret>")]
    InvalidToken,
    #[error("WEBAPP_URL is not a valid url ({url}): {source}")]
    InvalidWebAppUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("LOG_LEVEL has unknown level {0:?}")]
    InvalidLogLevel(String),
    #[error("LOG_CHAT_ID is not a chat id: {0:?}")]
    InvalidLogChatId(String),
    #[error("WEBHOOK_URL is not a valid url ({url}): {source}")]
    InvalidWebhookUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("WEBHOOK_PORT is not a port: {0:?}")]
    InvalidWebhookPort(String),
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
