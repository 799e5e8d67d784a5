use anyhow::Result;
use ishtopar::api_client::JobApiClient;
use ishtopar::bot;
use ishtopar::config::AppConfig;
use ishtopar::errors::error_logging;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::InlineQuery;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Timeout for calls against the Telegram API itself; the jobs API has its
/// own, shorter budget
const TELEGRAM_HTTP_TIMEOUT_SECS: u64 = 30;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    init_tracing();

    // Load and validate configuration before anything touches the network
    let config = match AppConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            error_logging::log_config_error(&e, "startup", "load_configuration");
            return Err(e.into());
        }
    };
    info!("{}", config.summary());

    let client = Arc::new(JobApiClient::new(&config.api)?);
    let config = Arc::new(config);

    // The Telegram transport gets its own client so a slow jobs API cannot
    // stall update delivery
    let telegram_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(TELEGRAM_HTTP_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client");

    let telegram_bot = Bot::with_client(config.bot.token.clone(), telegram_client);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher: commands, button presses, and inline queries
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let client = Arc::clone(&client);
            let config = Arc::clone(&config);
            move |bot: Bot, msg: Message| {
                let client = Arc::clone(&client);
                let config = Arc::clone(&config);
                async move { bot::message_handler(bot, msg, client, config).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let client = Arc::clone(&client);
            let config = Arc::clone(&config);
            move |bot: Bot, q: CallbackQuery| {
                let client = Arc::clone(&client);
                let config = Arc::clone(&config);
                async move { bot::callback_handler(bot, q, client, config).await }
            }
        }))
        .branch(Update::filter_inline_query().endpoint({
            let client = Arc::clone(&client);
            move |bot: Bot, q: InlineQuery| {
                let client = Arc::clone(&client);
                async move { bot::inline_query_handler(bot, q, client).await }
            }
        }));

    Dispatcher::builder(telegram_bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
