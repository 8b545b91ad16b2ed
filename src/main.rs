use std::{fmt::Debug, time::Duration};

use anyhow::Result;
use log::LevelFilter;
use reqwest::Client;
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    update_listeners::{webhooks, Polling, UpdateListener},
    utils::command::BotCommands,
    ApiError, RequestError,
};
use tokio::{
    signal,
    sync::mpsc::{self, Sender},
    task::JoinSet,
};
use tokio_util::sync::CancellationToken;

use bot_handlers::{command_handler, message_handler, plain_text, web_app_handler, Command, Router};
use common::{run_until_cancelled, Config, ConfigError, LogError, Webhook, IS_PROD};

use crate::logger::TgLogger;
use crate::tg_logs::{start_tg_logs_job, LogMessage};

mod logger;
mod tg_logs;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TG_LOGS_CAPACITY: usize = 100;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    let log_level = config.as_ref().map_or(common::DEFAULT_LOG_LEVEL, Config::log_level);
    let log_chat_id = config.as_ref().ok().and_then(Config::log_chat_id);

    let (tg_logs_tx, tg_logs_rx) = mpsc::channel(TG_LOGS_CAPACITY);
    init_logger(log_level, log_chat_id.map(|_| tg_logs_tx));

    let config = ensure_config(config)?;

    let bot = Bot::with_client(
        config.bot_token(),
        Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    );
    if let Err(e) = check_bot(&bot, config.bot_username()).await {
        if is_fatal(&e) {
            log::error!("telegram rejected BOT_TOKEN, bot is not started: {e}");
            return Err(e.into());
        }
        log::error!("failed to get bot info: {e}");
    }
    bot.set_my_commands(Command::bot_commands())
        .await
        .log_error_msg("failed to set bot commands");

    let router = Router::new(config.webapp_url().clone());
    let cancel_token = CancellationToken::new();

    let mut jobs = JoinSet::new();
    if let Some(log_chat_id) = log_chat_id {
        jobs.spawn(run_until_cancelled(
            "tg logs",
            cancel_token.clone(),
            start_tg_logs_job(bot.clone(), log_chat_id, tg_logs_rx),
        ));
    } else {
        log::warn!("LOG_CHAT_ID env not set, skip starting tg logs job")
    }
    jobs.spawn(run_until_cancelled(
        "bot",
        cancel_token.clone(),
        start_bot(bot, router, config.webhook().cloned()),
    ));

    jobs.spawn(async move {
        let signal = wait_for_signal().await;
        log::info!("got {signal}, stopping");
        cancel_token.cancel();
    });

    while let Some(res) = jobs.join_next().await {
        res.log_error_msg("job failed");
    }

    Ok(())
}

fn init_logger(level: LevelFilter, tg_logs: Option<Sender<LogMessage>>) {
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
        level,
        term_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(sender) = tg_logs {
        let tg_config = TgConfigBuilder::new()
            .add_ignore("ConnectionReset")
            .add_ignore("TerminatedByOtherGetUpdates")
            .build();
        loggers.push(TgLogger::new(sender, tg_config));
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("failed to init logger: {e}");
    }
}

/// Log the outcome of loading config. An error means the bot must not start
fn ensure_config(config: Result<Config, ConfigError>) -> Result<Config, ConfigError> {
    match &config {
        Ok(config) => log_config(config),
        Err(e) => log::error!("failed to load config, bot is not started: {e}"),
    }
    config
}

fn log_config(config: &Config) {
    log::info!("bot @{}, token {}", config.bot_username(), config.masked_token());
    log::info!("FAQ mini app at {}", config.webapp_url());
    if config.webapp_url().scheme() != "https" {
        log::warn!("WEBAPP_URL is not https, telegram clients will refuse to open it");
    }
    match config.webhook() {
        Some(webhook) => log::info!("updates via webhook {}, port {}", webhook.url, webhook.port),
        None => log::info!("updates via long polling"),
    }
}

/// Fails if telegram does not accept the token. `BOT_USERNAME` is display
/// only, a mismatch is just logged
async fn check_bot(bot: &Bot, username: &str) -> Result<(), RequestError> {
    let me = bot.get_me().await?;
    if me.username() != username {
        log::warn!("BOT_USERNAME is @{username}, but token belongs to @{}", me.username())
    }
    Ok(())
}

/// Errors after which retrying with the same token is pointless
fn is_fatal(e: &RequestError) -> bool {
    matches!(e, RequestError::Api(ApiError::InvalidToken))
}

#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(e) => {
            log::error!("failed to listen for SIGTERM: {e}");
            return wait_for_ctrl_c().await;
        }
    };
    tokio::select! {
        signal = wait_for_ctrl_c() => signal,
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() -> &'static str {
    signal::ctrl_c().await.log_error_msg("failed to listen for SIGINT");
    "SIGINT"
}

fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(dptree::filter_map(|msg: Message| msg.web_app_data().cloned()).endpoint(web_app_handler))
        .branch(dptree::filter_map(|msg: Message| plain_text(&msg)).endpoint(message_handler))
}

async fn start_bot(bot: Bot, router: Router, webhook: Option<Webhook>) {
    let Some(Webhook { url, port }) = webhook else {
        log::info!("starting bot with long polling");
        let listener = Polling::builder(bot.clone()).drop_pending_updates().build();
        return dispatch(bot, router, listener).await;
    };

    log::info!("starting bot with webhook, listening on port {port}");
    let options = webhooks::Options::new(([0, 0, 0, 0], port).into(), url).drop_pending_updates();
    match webhooks::axum(bot.clone(), options).await {
        Ok(listener) => dispatch(bot, router, listener).await,
        Err(e) => log::error!("failed to set webhook: {e}"),
    }
}

async fn dispatch<L>(bot: Bot, router: Router, listener: L)
where
    L: UpdateListener + Send,
    L::Err: Debug,
{
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![router])
        .default_handler(|update| async move { log::debug!("unhandled update {:?}", update.id) })
        .error_handler(LoggingErrorHandler::with_custom_text("error in dispatcher"))
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("error from update listener"),
        )
        .await;
}
