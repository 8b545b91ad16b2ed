use teloxide::types::{Recipient, UserId as TgUserId};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u64);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChatId(pub i64);

macro_rules! cast {
    ($($from:ty => $to:ty : $value:ident => $convert:expr),* $(,)?) => {
        $(impl From<$from> for $to {
            fn from($value: $from) -> Self {
                $convert
            }
        })*
    };
}

cast!(
    ChatId => Recipient: v => Recipient::Id(teloxide::types::ChatId(v.0)),
    TgUserId => UserId: v => Self(v.0),
);

/// Simple [`std::fmt::Display`] implementation
macro_rules! display {
    ($($from:ty : $self:ident => $value:expr),* $(,)?) => {
        $(impl ::std::fmt::Display for $from {
            fn fmt(&$self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $value.fmt(f)
            }
        })*
    };
}

display!(
    ChatId: self => self.0,
    UserId: self => self.0,
);
