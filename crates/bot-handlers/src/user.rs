use teloxide::types::User;

use common::types::UserId;

/// Name used when update has no sender, e.g. anonymous group admins
const ANONYMOUS_NAME: &str = "друже";

/// Sender of an update, as much as replies need to know about them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUser {
    id: Option<UserId>,
    first_name: String,
}

impl BotUser {
    pub fn new<S: Into<String>>(id: UserId, first_name: S) -> Self {
        let first_name = first_name.into();
        let first_name = if first_name.trim().is_empty() {
            ANONYMOUS_NAME.to_string()
        } else {
            first_name
        };
        Self {
            id: Some(id),
            first_name,
        }
    }
    pub fn anonymous() -> Self {
        Self {
            id: None,
            first_name: ANONYMOUS_NAME.to_string(),
        }
    }
    pub fn display_name(&self) -> &str {
        &self.first_name
    }
}

impl From<&User> for BotUser {
    fn from(user: &User) -> Self {
        Self::new(user.id.into(), user.first_name.as_str())
    }
}

impl From<Option<&User>> for BotUser {
    fn from(user: Option<&User>) -> Self {
        user.map_or_else(Self::anonymous, Self::from)
    }
}

impl std::fmt::Display for BotUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({id})", self.first_name),
            None => write!(f, "{} (anonymous)", self.first_name),
        }
    }
}
