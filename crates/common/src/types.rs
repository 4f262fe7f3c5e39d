use teloxide::types::ChatId as TgChatId;

/// Identifier of a conversation with the bot, as assigned by Telegram.
///
/// Private chats are positive, groups and channels are negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
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
    i64 => ChatId: v => Self(v),

    ChatId => TgChatId: v => Self(v.0),
    TgChatId => ChatId: v => Self(v.0),
);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
