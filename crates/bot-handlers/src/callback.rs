use crate::{menu::Screen, GET_CHAT_ID_TOKEN, INFO_TOKEN, MAIN_MENU_TOKEN};

/// Button pressed by user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetChatId,
    Info,
    MainMenu,
}

impl Action {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::GetChatId => GET_CHAT_ID_TOKEN,
            Self::Info => INFO_TOKEN,
            Self::MainMenu => MAIN_MENU_TOKEN,
        }
    }
    /// Screen shown after this button was pressed
    pub fn screen(self) -> Screen {
        match self {
            Self::GetChatId => Screen::ChatIdView,
            Self::Info => Screen::InfoView,
            Self::MainMenu => Screen::MainMenu,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = ActionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let res = match value {
            GET_CHAT_ID_TOKEN => Self::GetChatId,
            INFO_TOKEN => Self::Info,
            MAIN_MENU_TOKEN => Self::MainMenu,
            "" => return Err(ActionParseError::Empty),
            _ => return Err(ActionParseError::Unknown(value.to_owned())),
        };
        Ok(res)
    }
}

impl TryFrom<&String> for Action {
    type Error = ActionParseError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("empty callback data")]
    Empty,
    #[error("unknown action {0:?}")]
    Unknown(String),
}
