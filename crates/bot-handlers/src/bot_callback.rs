use async_trait::async_trait;
use teloxide::{prelude::*, types::MessageId};

use crate::menu::{handle_selection, InteractionEvent, RenderedView};

pub async fn callback_handler(bot: Bot, q: CallbackQuery) -> ResponseResult<()> {
    let target = q.message.as_ref().map(|m| (m.chat().id, m.id()));
    log::debug!("got callback {:?} from user {}", q.data, q.from.id);
    process_callback(&bot, &q.id, target, q.data.as_deref()).await
}

/// What to do with a pressed button
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CallbackOutcome {
    /// Replace message with a new view
    Edit {
        chat_id: ChatId,
        message_id: MessageId,
        view: RenderedView,
    },
    Ignore(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum IgnoreReason {
    #[error("message is not accessible")]
    NoMessage,
    #[error("callback data is empty")]
    NoData,
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}

pub(crate) fn route_callback(
    target: Option<(ChatId, MessageId)>,
    data: Option<&str>,
) -> CallbackOutcome {
    let Some((chat_id, message_id)) = target else {
        return CallbackOutcome::Ignore(IgnoreReason::NoMessage);
    };
    let Some(data) = data else {
        return CallbackOutcome::Ignore(IgnoreReason::NoData);
    };

    match handle_selection(&InteractionEvent::new(chat_id, data)) {
        Some(view) => CallbackOutcome::Edit {
            chat_id,
            message_id,
            view,
        },
        None => CallbackOutcome::Ignore(IgnoreReason::UnknownAction(data.to_owned())),
    }
}

/// Calls made in response to a pressed button
#[async_trait]
pub(crate) trait CallbackSink {
    async fn answer(&self, callback_id: &str) -> ResponseResult<()>;
    async fn edit(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        view: RenderedView,
    ) -> ResponseResult<()>;
}

#[async_trait]
impl CallbackSink for Bot {
    async fn answer(&self, callback_id: &str) -> ResponseResult<()> {
        self.answer_callback_query(callback_id).await?;
        Ok(())
    }
    async fn edit(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        view: RenderedView,
    ) -> ResponseResult<()> {
        let mut request = self
            .edit_message_text(chat_id, message_id, view.text)
            .reply_markup(view.keyboard);
        if let Some(parse_mode) = view.parse_mode {
            request = request.parse_mode(parse_mode);
        }
        request.await?;
        Ok(())
    }
}

pub(crate) async fn process_callback<S>(
    sink: &S,
    callback_id: &str,
    target: Option<(ChatId, MessageId)>,
    data: Option<&str>,
) -> ResponseResult<()>
where
    S: CallbackSink + Sync,
{
    // always answer, otherwise client shows loading until timeout
    sink.answer(callback_id).await?;

    match route_callback(target, data) {
        CallbackOutcome::Edit {
            chat_id,
            message_id,
            view,
        } => sink.edit(chat_id, message_id, view).await?,
        CallbackOutcome::Ignore(reason) => {
            log::warn!("ignoring callback {callback_id}: {reason}")
        }
    }

    Ok(())
}
