use teloxide::types::ReplyMarkup;
use url::Url;

use crate::{
    keyboards::Keyboards,
    keywords::{match_topic, Topic},
    texts,
    user::BotUser,
    webapp::WebAppPayload,
    Command,
};

/// Inbound update, reduced to what replies depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    Text(String),
    WebAppData(String),
}

/// Outgoing message: text with optional keyboard
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

impl Reply {
    fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }
    fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = Some(markup);
        self
    }
}

/// Maps every inbound update to exactly one reply.
///
/// Holds only the mini app url, so it is cheap to clone into handlers and
/// safe to call from any number of tasks.
#[derive(Debug, Clone)]
pub struct Router {
    webapp_url: Url,
}

impl Router {
    pub fn new(webapp_url: Url) -> Self {
        Self { webapp_url }
    }
    pub fn dispatch(&self, inbound: &Inbound, user: &BotUser) -> Reply {
        match inbound {
            Inbound::Command(Command::Start) => self.on_start(user),
            Inbound::Command(Command::Faq) => self.on_faq_command(),
            Inbound::Command(Command::Help) => self.on_help_command(),
            Inbound::Command(Command::Menu) => self.on_menu_command(user),
            Inbound::WebAppData(data) => self.on_web_app_data(data, user),
            Inbound::Text(text) => self.on_plain_text(text),
        }
    }
    pub fn on_start(&self, user: &BotUser) -> Reply {
        Reply::text(texts::welcome(user.display_name())).with_markup(Keyboards::main_menu(&self.webapp_url))
    }
    pub fn on_faq_command(&self) -> Reply {
        Reply::text(texts::OPEN_FAQ).with_markup(Keyboards::open_faq(&self.webapp_url))
    }
    pub fn on_help_command(&self) -> Reply {
        Reply::text(texts::HELP)
    }
    pub fn on_menu_command(&self, user: &BotUser) -> Reply {
        self.on_start(user)
    }
    pub fn on_web_app_data(&self, data: &str, _user: &BotUser) -> Reply {
        match WebAppPayload::from(data) {
            WebAppPayload::ContactSupport => Reply::text(texts::SUPPORT_REQUEST_ACCEPTED),
            WebAppPayload::CourseInfo => Reply::text(texts::course_info()),
            WebAppPayload::Unrecognized(data) => Reply::text(texts::web_app_request(data)),
        }
    }
    pub fn on_plain_text(&self, text: &str) -> Reply {
        match match_topic(text) {
            Some(Topic::Faq) => self.on_faq_command(),
            Some(Topic::Support) => Reply::text(texts::SUPPORT_CONTACTS),
            Some(Topic::School) => Reply::text(texts::about_school()),
            Some(Topic::Pricing) => Reply::text(texts::PRICING),
            None => Reply::text(texts::NOT_UNDERSTOOD),
        }
    }
}
