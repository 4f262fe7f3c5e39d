use log::{Level, LevelFilter, Metadata, Record};
use simplelog::SharedLogger;
use tokio::sync::mpsc::Sender;

use crate::handlers::tg_logs::LogMessage;

/// Transient errors which are not worth sending to log chat. Editing message
/// with the same content (button pressed twice) gives `MessageNotModified`
pub(crate) const IGNORED_ERRORS: &[&str] = &[
    "ConnectionReset",
    "TerminatedByOtherGetUpdates",
    "MessageNotModified",
];

#[derive(Debug, Default, Clone)]
pub(crate) struct Config {
    /// Messages containing any of these are not forwarded
    ignore: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct ConfigBuilder(Config);

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    pub(crate) fn add_ignore(&mut self, s: impl Into<String>) -> &mut Self {
        self.0.ignore.push(s.into());
        self
    }
    pub(crate) fn build(&mut self) -> Config {
        self.0.clone()
    }
}

/// Forwards error logs to telegram through log job
#[derive(Debug)]
pub(crate) struct TgLogger {
    sender: Sender<LogMessage>,
    config: Config,
}

impl TgLogger {
    pub(crate) fn new(sender: Sender<LogMessage>, config: Config) -> Box<Self> {
        Box::new(Self { sender, config })
    }
}

impl log::Log for TgLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = record.args().to_string();
        if self.config.ignore.iter().any(|s| text.contains(s.as_str())) {
            return;
        }

        let msg = LogMessage::log_error(text, record.target(), record.file(), record.line());
        // logger can be called from sync code, so never wait here
        if let Err(e) = self.sender.try_send(msg) {
            eprintln!("failed to forward log to telegram: {e}");
        }
    }

    fn flush(&self) {}
}

impl SharedLogger for TgLogger {
    fn level(&self) -> LevelFilter {
        LevelFilter::Error
    }

    fn config(&self) -> Option<&simplelog::Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn log::Log> {
        Box::new(*self)
    }
}
