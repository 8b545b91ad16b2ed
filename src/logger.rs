use log::{Level, LevelFilter, Metadata, Record};
use simplelog::SharedLogger;
use tokio::sync::mpsc::{error::TrySendError, Sender};

use crate::tg_logs::LogMessage;

/// Forwards error records to the telegram log chat
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
        if self.config.is_ignored(&text) {
            return;
        }
        let msg = LogMessage::error(text, record.target(), record.file(), record.line());
        // never block the thread that logs; drop the record instead
        if let Err(TrySendError::Full(_)) = self.sender.try_send(msg) {
            eprintln!("tg logs channel is full, dropping record");
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

#[derive(Debug, Default)]
pub(crate) struct Config {
    /// Records containing any of these are not forwarded
    ignore: Vec<String>,
}

impl Config {
    fn is_ignored(&self, text: &str) -> bool {
        self.ignore.iter().any(|i| text.contains(i.as_str()))
    }
}

#[derive(Debug, Default)]
pub(crate) struct ConfigBuilder(Config);

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    pub(crate) fn add_ignore<S: Into<String>>(mut self, s: S) -> Self {
        self.0.ignore.push(s.into());
        self
    }
    pub(crate) fn build(self) -> Config {
        self.0
    }
}
