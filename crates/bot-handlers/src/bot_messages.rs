use teloxide::prelude::*;

use crate::{commands::Command, menu::render_main_menu, RenderedView};

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            log::debug!("sending main menu to chat {}", msg.chat.id);
            send_view(&bot, msg.chat.id, render_main_menu()).await?;
        }
    }

    Ok(())
}

async fn send_view(bot: &Bot, chat_id: ChatId, view: RenderedView) -> ResponseResult<()> {
    let mut request = bot
        .send_message(chat_id, view.text)
        .reply_markup(view.keyboard);
    if let Some(parse_mode) = view.parse_mode {
        request = request.parse_mode(parse_mode);
    }
    request.await?;
    Ok(())
}
