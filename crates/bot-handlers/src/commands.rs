use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Почати роботу з ботом")]
    Start,
    #[command(description = "Відкрити FAQ")]
    Faq,
    #[command(description = "Показати головне меню")]
    Menu,
    #[command(description = "Довідка")]
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_NAME: &str = "SkillKlanBot";

    #[test]
    fn test_parse_commands() {
        let table = [
            ("/start", Some(Command::Start)),
            ("/faq", Some(Command::Faq)),
            ("/menu", Some(Command::Menu)),
            ("/help", Some(Command::Help)),
            ("/faq@SkillKlanBot", Some(Command::Faq)),
            ("/faq@OtherBot", None),
            ("/pricing", None),
            ("faq", None),
        ];
        for (i, &(text, expected)) in table.iter().enumerate() {
            assert_eq!(Command::parse(text, BOT_NAME).ok(), expected, "test table[{i}]");
        }
    }

    #[test]
    fn test_all_commands_listed() {
        let names: Vec<_> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(names, ["start", "faq", "menu", "help"]);
    }
}
