//! Screens of the bot menu and rendering of them.
//!
//! Everything here is pure: a view depends only on the pressed button and the
//! chat it was pressed in, nothing is kept between calls.

use teloxide::{
    types::{InlineKeyboardMarkup, ParseMode},
    utils::markdown::code_inline,
};

use common::types::ChatId;

use crate::{callback::Action, keyboards::Keyboards, utils::escape};

const WELCOME_MSG: &str = "👋 Benvenuto nel Bot di Rilevamento Cadute!\n\n\
    Questo bot ti permetterà di ricevere notifiche in caso di rilevamento cadute.\n\n\
    Cosa vuoi fare?";

const CHAT_ID_HEADER: &str = "🆔 Il tuo Chat ID è:";
const CHAT_ID_HINT: &str =
    "📋 Copia questo numero e inseriscilo nell'app per ricevere le notifiche.";

// '*' is not escaped, so header is bold
const INFO_MSG: &str = "ℹ️ *Come utilizzare questo bot:*\n\n\
    1️⃣ Ottieni il tuo Chat ID usando il pulsante apposito\n\
    2️⃣ Copia il numero fornito\n\
    3️⃣ Inserisci il numero nell'app di rilevamento cadute\n\
    4️⃣ Quando l'app rileva una caduta, riceverai una notifica qui su Telegram\n\n\
    Per qualsiasi problema, contatta l'amministratore dell'app.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    ChatIdView,
    InfoView,
}

impl Screen {
    pub fn render(self, chat_id: ChatId) -> RenderedView {
        match self {
            Self::MainMenu => RenderedView {
                text: WELCOME_MSG.to_string(),
                parse_mode: None,
                keyboard: Keyboards::main_menu().into(),
            },
            Self::ChatIdView => RenderedView {
                text: [
                    escape(CHAT_ID_HEADER),
                    code_inline(&chat_id.to_string()),
                    escape(CHAT_ID_HINT),
                ]
                .join("\n\n"),
                parse_mode: Some(ParseMode::MarkdownV2),
                keyboard: Keyboards::back_to_menu().into(),
            },
            Self::InfoView => RenderedView {
                text: escape(INFO_MSG),
                parse_mode: Some(ParseMode::MarkdownV2),
                keyboard: Keyboards::back_to_menu().into(),
            },
        }
    }
}

/// Message ready to be sent or to replace an existing one
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub text: String,
    /// `None` means plain text
    pub parse_mode: Option<ParseMode>,
    pub keyboard: InlineKeyboardMarkup,
}

/// Button press in some chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    pub chat_id: ChatId,
    /// Callback data of the pressed button
    pub token: String,
}

impl InteractionEvent {
    pub fn new<C, T>(chat_id: C, token: T) -> Self
    where
        C: Into<ChatId>,
        T: Into<String>,
    {
        Self {
            chat_id: chat_id.into(),
            token: token.into(),
        }
    }
}

pub fn render_main_menu() -> RenderedView {
    Screen::MainMenu.render(ChatId::default())
}

/// Returns view for the pressed button, or `None` if the button is unknown
pub fn handle_selection(event: &InteractionEvent) -> Option<RenderedView> {
    let action = Action::try_from(&event.token).ok()?;
    Some(action.screen().render(event.chat_id))
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButton as Btn;

    use super::*;

    const CHAT_ID: i64 = 12345;

    fn select(token: &str) -> Option<RenderedView> {
        handle_selection(&InteractionEvent::new(CHAT_ID, token))
    }

    fn main_menu_buttons() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new([[
            Btn::callback("🆔 Ottieni Chat ID", "get_chat_id"),
            Btn::callback("ℹ️ Informazioni", "info"),
        ]])
    }

    fn back_buttons() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new([[Btn::callback("🔄 Menu Principale", "main_menu")]])
    }

    #[test]
    fn test_main_menu() {
        let view = render_main_menu();
        similar_asserts::assert_eq!(
            view,
            RenderedView {
                text: "👋 Benvenuto nel Bot di Rilevamento Cadute!\n\n\
                    Questo bot ti permetterà di ricevere notifiche in caso di rilevamento cadute.\n\n\
                    Cosa vuoi fare?"
                    .to_string(),
                parse_mode: None,
                keyboard: main_menu_buttons(),
            }
        );
        assert_eq!(render_main_menu(), render_main_menu());
    }

    #[test]
    fn test_chat_id_view() {
        let view = select("get_chat_id").unwrap();
        similar_asserts::assert_eq!(
            view,
            RenderedView {
                text: "🆔 Il tuo Chat ID è:\n\n\
                    `12345`\n\n\
                    📋 Copia questo numero e inseriscilo nell'app per ricevere le notifiche\\."
                    .to_string(),
                parse_mode: Some(ParseMode::MarkdownV2),
                keyboard: back_buttons(),
            }
        );
        assert!(view.text.contains("`12345`"));
    }

    #[test]
    fn test_chat_id_view_group() {
        let event = InteractionEvent::new(ChatId(-1001234567890), "get_chat_id");
        let view = handle_selection(&event).unwrap();
        // no escaping inside code span
        assert!(view.text.contains("`-1001234567890`"));
    }

    #[test]
    fn test_info_view() {
        let view = select("info").unwrap();
        similar_asserts::assert_eq!(
            view,
            RenderedView {
                text: "ℹ️ *Come utilizzare questo bot:*\n\n\
                    1️⃣ Ottieni il tuo Chat ID usando il pulsante apposito\n\
                    2️⃣ Copia il numero fornito\n\
                    3️⃣ Inserisci il numero nell'app di rilevamento cadute\n\
                    4️⃣ Quando l'app rileva una caduta, riceverai una notifica qui su Telegram\n\n\
                    Per qualsiasi problema, contatta l'amministratore dell'app\\."
                    .to_string(),
                parse_mode: Some(ParseMode::MarkdownV2),
                keyboard: back_buttons(),
            }
        );
    }

    #[test]
    fn test_main_menu_selection() {
        assert_eq!(select("main_menu"), Some(render_main_menu()));
    }

    #[test]
    fn test_unknown_token_ignored() {
        for token in ["", "unknown", "INFO", "main_menu ", "get_chat_id:1"] {
            assert_eq!(select(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_start_info_back_to_menu() {
        let start = render_main_menu();

        let info = select(Action::Info.as_token()).unwrap();
        assert_ne!(info, start);

        let back = info
            .keyboard
            .inline_keyboard
            .concat()
            .into_iter()
            .find_map(|btn| match btn.kind {
                teloxide::types::InlineKeyboardButtonKind::CallbackData(data) => Some(data),
                _ => None,
            })
            .unwrap();
        let menu = select(&back).unwrap();
        assert_eq!(menu, start);
        assert_eq!(menu.text.as_bytes(), start.text.as_bytes());
    }
}
