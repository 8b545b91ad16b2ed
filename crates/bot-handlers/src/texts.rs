//! Reply templates

pub(crate) const COURSES: &str = "\
🧪 QA (Тестування) - 3 місяці
📊 Бізнес-аналітика - 4 місяці
⚙️ Backend розробка - 6 місяців";

pub(crate) fn welcome(name: &str) -> String {
    format!(
        "👋 Вітаю, {name}!

Я бот SkillKlan - IT школа з курсами:
{courses}

📚 Натисніть кнопку FAQ для отримання відповідей на популярні питання!",
        courses = bulleted(COURSES),
    )
}

pub(crate) const OPEN_FAQ: &str =
    "📚 Натисніть кнопку нижче, щоб відкрити FAQ з часто запитуваними питаннями про SkillKlan!";

pub(crate) const HELP: &str = "\
🔧 Доступні команди:

/start - Почати роботу з ботом
/faq - Відкрити FAQ
/menu - Показати головне меню
/help - Ця довідка

📱 Кнопки:
• 📚 FAQ - Відкрити часто запитувані питання
• 💬 Зв'язатися з підтримкою
• ℹ️ Про школу

🌐 Веб-сайт: https://skillklan.com
📧 Email: info@skillklan.com";

pub(crate) const SUPPORT_REQUEST_ACCEPTED: &str =
    "💬 Дякую за звернення! Наш менеджер зв'яжеться з вами найближчим часом.";

pub(crate) fn course_info() -> String {
    format!("📚 Ось інформація про наші курси:\n\n{COURSES}")
}

pub(crate) fn web_app_request(payload: &str) -> String {
    format!("📥 Отримано ваш запит: {payload}\n\nНаш менеджер обробить його та зв'яжеться з вами!")
}

pub(crate) const SUPPORT_CONTACTS: &str = "\
💬 Для зв'язку з підтримкою:

📧 Email: support@skillklan.com
📱 Telegram: @SkillKlanSupport
🌐 Сайт: https://skillklan.com/support";

pub(crate) fn about_school() -> String {
    format!(
        "🏫 SkillKlan - це IT школа, яка готує спеціалістів у сфері технологій!

🎯 Наші напрямки:
{courses}

💻 Всі курси доступні онлайн та офлайн в Києві!

📚 Детальніше в FAQ: /faq",
        courses = bulleted(COURSES),
    )
}

pub(crate) const PRICING: &str = "\
💳 Інформація про оплату:

💰 Вартість залежить від напрямку та тривалості
💳 Приймаємо оплату картою, готівкою або банківським переказом
📅 Можна оплатити весь курс одразу або розбити на частини

📞 Для отримання точних цін зверніться до менеджера: /start";

pub(crate) const NOT_UNDERSTOOD: &str = "\
🤔 Не розумію ваш запит. Спробуйте:

• /faq - для пошуку відповідей
• /help - для довідки
• /menu - для головного меню

Або просто натисніть кнопку 📚 FAQ!";

fn bulleted(lines: &str) -> String {
    lines
        .lines()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_all_commands() {
        use teloxide::utils::command::BotCommands;

        for command in crate::Command::bot_commands() {
            let name = command.command.trim_start_matches('/');
            assert!(HELP.contains(&format!("/{name} - ")), "/{name} missing in help");
        }
    }

    #[test]
    fn test_courses_are_bulleted() {
        assert_eq!(
            bulleted(COURSES),
            "• 🧪 QA (Тестування) - 3 місяці\n• 📊 Бізнес-аналітика - 4 місяці\n• ⚙️ Backend розробка - 6 місяців"
        );
        assert!(welcome("Оля").contains("• ⚙️ Backend розробка - 6 місяців"));
    }
}
