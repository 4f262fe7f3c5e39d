use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::callback::Action;

const GET_CHAT_ID_BUTTON: &str = "🆔 Ottieni Chat ID";
const INFO_BUTTON: &str = "ℹ️ Informazioni";
const MAIN_MENU_BUTTON: &str = "🔄 Menu Principale";

#[derive(Debug, Default)]
pub(crate) struct KeyboardBuilder {
    keys: Vec<InlineKeyboardButton>,
    columns: usize,
}

impl KeyboardBuilder {
    fn with_layout(rows_capacity: usize, columns: usize) -> Self {
        Self {
            keys: Vec::with_capacity(rows_capacity * columns),
            columns,
        }
    }
    fn callback<T>(mut self, text: T, action: Action) -> Self
    where
        T: Into<String>,
    {
        self.keys
            .push(InlineKeyboardButton::callback(text, action.as_token()));
        self
    }
}

impl From<KeyboardBuilder> for InlineKeyboardMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::new(value.keys.chunks(value.columns.max(1)).map(|row| row.to_owned()))
    }
}

pub(crate) struct Keyboards;

impl Keyboards {
    pub(crate) fn main_menu() -> KeyboardBuilder {
        KeyboardBuilder::with_layout(1, 2)
            .callback(GET_CHAT_ID_BUTTON, Action::GetChatId)
            .callback(INFO_BUTTON, Action::Info)
    }
    pub(crate) fn back_to_menu() -> KeyboardBuilder {
        KeyboardBuilder::with_layout(1, 1).callback(MAIN_MENU_BUTTON, Action::MainMenu)
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::{InlineKeyboardButton as Btn, InlineKeyboardMarkup as Markup};

    use super::*;

    #[test]
    fn test_keyboards() {
        let table = vec![
            (
                Keyboards::main_menu(),
                vec![vec![
                    Btn::callback(GET_CHAT_ID_BUTTON, "get_chat_id"),
                    Btn::callback(INFO_BUTTON, "info"),
                ]],
            ),
            (
                Keyboards::back_to_menu(),
                vec![vec![Btn::callback(MAIN_MENU_BUTTON, "main_menu")]],
            ),
        ];
        for (res, expected) in table {
            let res: Markup = res.into();
            similar_asserts::assert_eq!(res, Markup::new(expected));
        }
    }

    #[test]
    fn test_layout_wraps_rows() {
        let keyboard: InlineKeyboardMarkup = KeyboardBuilder::with_layout(2, 2)
            .callback("a", Action::GetChatId)
            .callback("b", Action::Info)
            .callback("c", Action::MainMenu)
            .into();
        let rows: Vec<usize> = keyboard.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(rows, vec![2, 1]);
    }
}
