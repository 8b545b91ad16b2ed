mod bot_messages;
mod commands;
mod keyboards;
mod keywords;
mod router;
mod texts;
mod user;
mod webapp;

pub use bot_messages::{command_handler, message_handler, plain_text, web_app_handler};
pub use commands::Command;
pub use router::{Inbound, Reply, Router};
pub use user::BotUser;
