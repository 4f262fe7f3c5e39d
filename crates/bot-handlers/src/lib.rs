mod bot_callback;
mod bot_messages;
mod callback;
mod commands;
mod keyboards;
mod menu;
mod utils;

// callback data of inline buttons, the whole payload is a single token
const GET_CHAT_ID_TOKEN: &str = "get_chat_id";
const INFO_TOKEN: &str = "info";
const MAIN_MENU_TOKEN: &str = "main_menu";

pub use bot_callback::callback_handler;
pub use bot_messages::command_handler;
pub use callback::{Action, ActionParseError};
pub use commands::Command;
pub use menu::{handle_selection, render_main_menu, InteractionEvent, RenderedView, Screen};
