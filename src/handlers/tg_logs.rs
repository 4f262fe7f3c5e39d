use std::fmt::Display;

use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{ChatId, ParseMode},
    utils::markdown::code_block_with_lang,
    Bot,
};
use tokio::sync::mpsc::Receiver;

/// Forward log messages to `chat_id` until the channel is closed
pub(crate) async fn start_tg_logs_job(bot: Bot, chat_id: ChatId, mut rx: Receiver<LogMessage>) {
    log::debug!("starting tg logs job");
    while let Some(text) = rx.recv().await {
        // not error level, otherwise it will be sent back here
        if let Err(e) = bot
            .send_message(chat_id, text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            log::warn!("failed to send log: {e}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogMessage {
    Code(String),
}

impl LogMessage {
    pub(crate) fn log_error(
        s: impl Into<String>,
        target: &str,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Self {
        let mut msg = format!("[ERROR] {}\n        at {target}", s.into());
        if let Some(file) = file {
            msg += &format!(": {file}");
            if let Some(line) = line {
                msg += &format!(":{line}");
            }
        }
        Self::Code(msg)
    }
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogMessage::Code(s) => code_block_with_lang(s, "log").fmt(f),
        }
    }
}
