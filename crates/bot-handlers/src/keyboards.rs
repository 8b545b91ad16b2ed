use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup,
    WebAppInfo,
};
use url::Url;

pub(crate) const FAQ_BUTTON: &str = "📚 FAQ";
pub(crate) const OPEN_FAQ_BUTTON: &str = "📚 Відкрити FAQ";
pub(crate) const SUPPORT_BUTTON: &str = "💬 Зв'язатися з підтримкою";
pub(crate) const ABOUT_SCHOOL_BUTTON: &str = "ℹ️ Про школу";

/// Buttons laid out row by row, `columns` buttons in a row
#[derive(Debug)]
pub(crate) struct KeyboardBuilder<B> {
    keys: Vec<B>,
    columns: usize,
}

impl<B> KeyboardBuilder<B> {
    fn with_layout(rows_capacity: usize, columns: usize) -> Self {
        Self {
            keys: Vec::with_capacity(rows_capacity * columns),
            columns: columns.max(1),
        }
    }
    fn push(mut self, key: B) -> Self {
        self.keys.push(key);
        self
    }
}

impl<B: Clone> KeyboardBuilder<B> {
    fn rows(&self) -> impl Iterator<Item = Vec<B>> + '_ {
        self.keys.chunks(self.columns).map(|row| row.to_owned())
    }
}

impl KeyboardBuilder<KeyboardButton> {
    fn text<T: Into<String>>(self, text: T) -> Self {
        self.push(KeyboardButton::new(text))
    }
    fn web_app<T: Into<String>>(self, text: T, url: Url) -> Self {
        self.push(KeyboardButton::new(text).request(ButtonRequest::WebApp(WebAppInfo { url })))
    }
}

impl KeyboardBuilder<InlineKeyboardButton> {
    fn web_app<T: Into<String>>(self, text: T, url: Url) -> Self {
        self.push(InlineKeyboardButton::web_app(text, WebAppInfo { url }))
    }
}

impl From<KeyboardBuilder<KeyboardButton>> for ReplyMarkup {
    fn from(value: KeyboardBuilder<KeyboardButton>) -> Self {
        Self::Keyboard(KeyboardMarkup::new(value.rows()).resize_keyboard())
    }
}

impl From<KeyboardBuilder<InlineKeyboardButton>> for ReplyMarkup {
    fn from(value: KeyboardBuilder<InlineKeyboardButton>) -> Self {
        Self::InlineKeyboard(InlineKeyboardMarkup::new(value.rows()))
    }
}

pub(crate) struct Keyboards;

impl Keyboards {
    /// Persistent menu shown by /start and /menu
    pub(crate) fn main_menu(webapp_url: &Url) -> ReplyMarkup {
        KeyboardBuilder::<KeyboardButton>::with_layout(3, 1)
            .web_app(FAQ_BUTTON, webapp_url.clone())
            .text(SUPPORT_BUTTON)
            .text(ABOUT_SCHOOL_BUTTON)
            .into()
    }
    pub(crate) fn open_faq(webapp_url: &Url) -> ReplyMarkup {
        KeyboardBuilder::<InlineKeyboardButton>::with_layout(1, 1)
            .web_app(OPEN_FAQ_BUTTON, webapp_url.clone())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::{InlineKeyboardButton as InlineBtn, KeyboardButton as Btn};

    use super::*;

    fn url() -> Url {
        Url::parse("https://skillklan.com/faq.html").unwrap()
    }

    #[test]
    fn test_main_menu() {
        let web_app = ButtonRequest::WebApp(WebAppInfo { url: url() });
        let expected = KeyboardMarkup::new(vec![
            vec![Btn::new(FAQ_BUTTON).request(web_app)],
            vec![Btn::new(SUPPORT_BUTTON)],
            vec![Btn::new(ABOUT_SCHOOL_BUTTON)],
        ])
        .resize_keyboard();

        similar_asserts::assert_eq!(Keyboards::main_menu(&url()), ReplyMarkup::Keyboard(expected));
    }

    #[test]
    fn test_open_faq() {
        let expected = InlineKeyboardMarkup::new(vec![vec![InlineBtn::web_app(
            OPEN_FAQ_BUTTON,
            WebAppInfo { url: url() },
        )]]);

        similar_asserts::assert_eq!(Keyboards::open_faq(&url()), ReplyMarkup::InlineKeyboard(expected));
    }

    #[test]
    fn test_layout_columns() {
        let markup: ReplyMarkup = KeyboardBuilder::<Btn>::with_layout(2, 2)
            .text("1")
            .text("2")
            .text("3")
            .into();
        let expected = KeyboardMarkup::new(vec![vec![Btn::new("1"), Btn::new("2")], vec![Btn::new("3")]]).resize_keyboard();

        similar_asserts::assert_eq!(markup, ReplyMarkup::Keyboard(expected));
    }
}
