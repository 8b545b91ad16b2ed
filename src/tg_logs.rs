use std::fmt::Display;

use teloxide::{
    payloads::SendMessageSetters, requests::Requester, types::ParseMode, utils::markdown::code_block_with_lang,
    Bot,
};
use tokio::sync::mpsc::Receiver;

use common::{types::ChatId, LogError};

pub(crate) async fn start_tg_logs_job(bot: Bot, chat_id: ChatId, mut rx: Receiver<LogMessage>) {
    while let Some(msg) = rx.recv().await {
        // warn, not error: an error here would be forwarded again
        bot.send_message(chat_id, msg.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .log_warn_msg("failed to send log");
    }
}

/// Error record, sent as a code block
#[derive(Debug)]
pub(crate) struct LogMessage(String);

impl LogMessage {
    pub(crate) fn error(s: impl Into<String>, target: &str, file: Option<&str>, line: Option<u32>) -> Self {
        let mut msg = format!("[ERROR] {}\n        at {target}", s.into());
        if let Some(file) = file {
            msg += &format!(": {file}");
            if let Some(line) = line {
                msg += &format!(":{line}");
            }
        }
        Self(msg)
    }
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        code_block_with_lang(&self.0, "log").fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let table = [
            (None, None, "[ERROR] boom\n        at bot"),
            (Some("src/main.rs"), None, "[ERROR] boom\n        at bot: src/main.rs"),
            (Some("src/main.rs"), Some(10), "[ERROR] boom\n        at bot: src/main.rs:10"),
            (None, Some(10), "[ERROR] boom\n        at bot"),
        ];
        for (i, &(file, line, expected)) in table.iter().enumerate() {
            let LogMessage(msg) = LogMessage::error("boom", "bot", file, line);
            assert_eq!(msg, expected, "test table[{i}]");
        }
    }

    #[test]
    fn test_display_as_code_block() {
        let msg = LogMessage::error("boom", "bot", None, None).to_string();
        assert!(msg.starts_with("```log\n"), "{msg}");
        assert!(msg.ends_with("```"), "{msg}");
    }
}
