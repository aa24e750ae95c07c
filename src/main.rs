//! TourBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::update_listeners;
use tracing::{info, warn, error};

use TourBuddy::{
    config::Settings,
    utils::logging,
    handlers::{handle_message, run_console},
    services::telegram::{build_bot, TelegramTransport},
    state::{AppContext, JsonFileBackend, SessionStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging).context("failed to initialize logging")?;

    info!("Starting {}...", TourBuddy::info());

    // Load persisted sessions
    info!(path = %settings.storage.path, "Loading session store...");
    let backend = Arc::new(JsonFileBackend::new(&settings.storage.path));
    let store = Arc::new(SessionStore::open(backend).await);

    // Initialize bot
    let bot = build_bot(&settings.bot).context("failed to build the bot client")?;
    let transport = Arc::new(TelegramTransport::new(bot.clone()));

    let me = bot.get_me().await.context("failed to reach the Telegram Bot API")?;
    info!(bot_id = me.id.0, username = ?me.username, "Connected to Telegram");

    let context = AppContext::new(settings.clone(), store, transport.clone())?;

    // Resume conversations that arrived while the bot was offline
    match context.recovery().run().await {
        Ok(resumed) => info!(resumed = resumed, "Startup recovery complete"),
        Err(e) => error!(error = %e, "Startup recovery failed"),
    }
    if let Err(e) = transport.acknowledge_pending().await {
        warn!(error = %e, "Failed to acknowledge pending updates");
    }

    let _supervisors = context.supervisor.clone().start();

    if settings.control.console_enabled {
        tokio::spawn(run_console(context.control.clone()));
    }

    let mut dispatcher = Dispatcher::builder(bot.clone(), create_handler())
        .dependencies(dptree::deps![context.dispatcher.clone()])
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("TourBuddy bot is ready!");

    let listener = update_listeners::polling_default(bot).await;
    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Error from the update listener"),
        )
        .await;

    context.store.persist().await;
    info!("TourBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(Update::filter_message().endpoint(handle_message))
}
