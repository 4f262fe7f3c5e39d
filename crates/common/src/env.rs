use crate::types::ChatId;

const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
const LOG_CHAT_ID_VAR: &str = "LOG_CHAT_ID";

/// Runtime configuration of the bot.
///
/// Values are taken from the process environment. A `.env` file in the working
/// directory is loaded first if present, without overriding variables that are
/// already set.
#[derive(Clone)]
pub struct Config {
    bot_token: String,
    log_chat_id: Option<ChatId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup(BOT_TOKEN_VAR)
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let log_chat_id = match lookup(LOG_CHAT_ID_VAR).map(|s| s.trim().to_owned()) {
            Some(s) if !s.is_empty() => Some(
                s.parse::<i64>()
                    .map(ChatId)
                    .map_err(|_| ConfigError::InvalidLogChatId(s))?,
            ),
            _ => None,
        };

        Ok(Self {
            bot_token,
            log_chat_id,
        })
    }
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    /// Chat which receives error logs, if configured
    pub fn log_chat_id(&self) -> Option<ChatId> {
        self.log_chat_id
    }
}

// token is a secret, keep it out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"***")
            .field("log_chat_id", &self.log_chat_id)
            .finish()
    }
}

/// Missing `.env` is fine, variables may come from the environment. Anything
/// else stops loading in the middle of the file, so it is reported.
fn check_dotenv<T>(res: dotenvy::Result<T>) -> Result<(), ConfigError> {
    match res {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::DotEnv(e.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load .env: {0}")]
    DotEnv(String),
    #[error("BOT_TOKEN env variable is not set or empty")]
    MissingToken,
    #[error("invalid LOG_CHAT_ID: {0:?}")]
    InvalidLogChatId(String),
}
