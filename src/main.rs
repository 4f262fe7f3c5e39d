use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use simplelog::LevelFilter;
use teloxide::{prelude::*, utils::command::BotCommands};
use tokio::{
    signal,
    sync::mpsc::{self, Sender},
    task::JoinSet,
};
use tokio_util::sync::CancellationToken;

use bot_handlers::{callback_handler, command_handler, Command};
use common::{spawn_with_token, Config, LogError};

use crate::handlers::tg_logs::{start_tg_logs_job, LogMessage};
use crate::logger::TgLogger;

mod handlers;
mod logger;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TG_LOGS_CHANNEL_SIZE: usize = 100;

const IS_PROD: bool = cfg!(feature = "prod");
const LOG_LEVEL: LevelFilter = if IS_PROD {
    LevelFilter::Error
} else {
    LevelFilter::Debug
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let (tg_logs_tx, tg_logs_rx) = mpsc::channel(TG_LOGS_CHANNEL_SIZE);
    let log_chat_id = config.log_chat_id();
    init_logger(log_chat_id.map(|_| tg_logs_tx))?;
    log::debug!("loaded {config:?}");

    let bot = Bot::with_client(
        config.bot_token(),
        Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    );
    bot.set_my_commands(Command::bot_commands())
        .await
        .log_error_msg("failed to register bot commands");

    let cancel_token = CancellationToken::new();

    let mut jobs = JoinSet::new();
    if let Some(log_chat_id) = log_chat_id {
        jobs.spawn(spawn_with_token(
            cancel_token.clone(),
            start_tg_logs_job(bot.clone(), log_chat_id.into(), tg_logs_rx),
        ));
    } else {
        log::warn!("LOG_CHAT_ID env not set, skip starting tg logs job")
    }
    jobs.spawn(spawn_with_token(cancel_token.clone(), start_bot(bot)));

    jobs.spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("failed to listen for SIGINT: {e}");
        }
        log::info!("shutting down");
        cancel_token.cancel();
    });

    while (jobs.join_next().await).is_some() {}

    Ok(())
}

fn init_logger(tg_sender: Option<Sender<LogMessage>>) -> Result<()> {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode};

    use logger::ConfigBuilder as TgConfigBuilder;

    let term_config = if IS_PROD {
        simplelog::Config::default()
    } else {
        ConfigBuilder::new()
            .add_filter_ignore_str("h2")
            .add_filter_ignore_str("hyper")
            .add_filter_ignore_str("reqwest")
            .add_filter_ignore_str("rustls")
            .build()
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LOG_LEVEL,
        term_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(sender) = tg_sender {
        let mut tg_config = TgConfigBuilder::new();
        for s in logger::IGNORED_ERRORS {
            tg_config.add_ignore(*s);
        }
        loggers.push(TgLogger::new(sender, tg_config.build()));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

async fn start_bot(bot: Bot) {
    log::debug!("starting bot");
    let handler = dptree::entry()
        .branch(
            Update::filter_message().branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(command_handler),
            ),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler));
    Dispatcher::builder(bot, handler)
        .default_handler(|_update| async move { log::debug!("skipping unhandled update") })
        .error_handler(LoggingErrorHandler::with_custom_text("error in dispatcher"))
        .build()
        .dispatch()
        .await;
}
