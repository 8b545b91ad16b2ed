use teloxide::{
    prelude::*,
    types::{MessageEntity, MessageEntityKind, WebAppData},
};

use crate::{
    router::{Inbound, Reply, Router},
    user::BotUser,
    Command,
};

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command, router: Router) -> ResponseResult<()> {
    let user = BotUser::from(msg.from.as_ref());
    log::debug!("command {cmd:?} from {user}");

    let reply = router.dispatch(&Inbound::Command(cmd), &user);
    send_reply(&bot, msg.chat.id, reply).await
}

pub async fn web_app_handler(bot: Bot, msg: Message, data: WebAppData, router: Router) -> ResponseResult<()> {
    let user = BotUser::from(msg.from.as_ref());
    log::info!("got web app data from {user}: {:?}", data.data);

    let reply = router.dispatch(&Inbound::WebAppData(data.data), &user);
    send_reply(&bot, msg.chat.id, reply).await
}

pub async fn message_handler(bot: Bot, msg: Message, text: String, router: Router) -> ResponseResult<()> {
    let user = BotUser::from(msg.from.as_ref());

    let reply = router.dispatch(&Inbound::Text(text), &user);
    send_reply(&bot, msg.chat.id, reply).await
}

/// Text of a message that should be answered by keyword matching.
///
/// Slash commands unknown to [`Command`] are skipped.
pub fn plain_text(msg: &Message) -> Option<String> {
    let text = msg.text()?;
    if starts_with_command(msg.entities().unwrap_or_default()) {
        return None;
    }
    Some(text.to_owned())
}

/// Telegram marks a command with a `bot_command` entity, text like `/ 5`
/// or `/path` without one is plain text
fn starts_with_command(entities: &[MessageEntity]) -> bool {
    entities
        .iter()
        .any(|e| e.kind == MessageEntityKind::BotCommand && e.offset == 0)
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let request = bot.send_message(chat_id, reply.text);
    match reply.markup {
        Some(markup) => request.reply_markup(markup).await?,
        None => request.await?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_command() {
        let command = |offset| MessageEntity::new(MessageEntityKind::BotCommand, offset, 4);
        let bold = MessageEntity::new(MessageEntityKind::Bold, 0, 4);

        let table = [
            (vec![], false),
            (vec![bold.clone()], false),
            (vec![command(0)], true),
            (vec![bold, command(0)], true),
            (vec![command(5)], false),
        ];
        for (i, (entities, expected)) in table.iter().enumerate() {
            assert_eq!(starts_with_command(entities), *expected, "test table[{i}]");
        }
    }
}
