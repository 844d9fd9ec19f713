//! RunSpark Telegram bot
//!
//! Main entry point: loads configuration, wires adapters into the services
//! and runs the dispatcher until Ctrl+C.

use std::sync::Arc;

use anyhow::Context;
use application::ports::{ClockPort, MessengerPort, SchedulerPort, SpeechPort, WeatherPort};
use application::{
    ChatRegistry, DEFAULT_CHECK_TIMEOUT, MotivationConfig, MotivationService, SubscriptionConfig,
    SubscriptionService, WeatherLookup, check_dependencies,
};
use clap::Parser;
use futures::FutureExt;
use infrastructure::{
    AppConfig, DailyScheduler, SpeechAdapter, SystemClock, TelegramMessenger, WeatherAdapter,
    trigger_callback,
};
use presentation_bot::{BotServices, Command, init_tracing, schema};
use secrecy::ExposeSecret;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

/// RunSpark bot
#[derive(Parser, Debug)]
#[command(name = "runspark-bot")]
#[command(author, version, about = "Daily running motivation bot for Telegram", long_about = None)]
struct Cli {
    /// Configuration file, with or without the .toml extension
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config).context("Failed to load configuration")?;
    init_tracing(&config.logging, cli.verbose);

    info!("🏃 RunSpark v{} starting...", env!("CARGO_PKG_VERSION"));

    let location = config.location.geo_location()?;
    let timezone = config.location.zone()?;
    let daily_time = config.schedule.daily_time()?;

    info!(
        location = %location,
        timezone = %timezone,
        time = %daily_time,
        "Configuration loaded"
    );

    let bot = Bot::new(config.bot_token()?.expose_secret());

    // Adapters
    let messenger: Arc<dyn MessengerPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let weather: Arc<dyn WeatherPort> = Arc::new(
        WeatherAdapter::with_config(config.weather.clone())
            .context("Failed to initialize weather client")?,
    );
    let speech: Arc<dyn SpeechPort> = Arc::new(
        SpeechAdapter::new(config.speech.clone()).context("Failed to initialize speech")?,
    );
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let health =
        check_dependencies(weather.as_ref(), speech.as_ref(), DEFAULT_CHECK_TIMEOUT).await;
    if health.all_healthy() {
        info!("✅ Weather and speech services reachable");
    } else {
        warn!(
            weather = health.weather,
            speech = health.speech,
            "⚠️ Starting with degraded dependencies"
        );
    }

    // Services
    let registry = Arc::new(ChatRegistry::new());
    let motivation = Arc::new(MotivationService::new(
        Arc::clone(&registry),
        WeatherLookup::new(weather, location, timezone),
        speech,
        Arc::clone(&messenger),
        clock,
        MotivationConfig {
            timezone,
            language: config.speech.language.clone(),
        },
    ));

    let on_trigger = {
        let motivation = Arc::clone(&motivation);
        trigger_callback(move |chat_id| {
            let motivation = Arc::clone(&motivation);
            async move {
                motivation
                    .send_prompt(chat_id)
                    .await
                    .map_err(|e| e.to_string())
            }
            .boxed()
        })
    };
    let scheduler = Arc::new(
        DailyScheduler::new(on_trigger)
            .await
            .context("Failed to start scheduler")?,
    );
    let scheduler_port = Arc::clone(&scheduler) as Arc<dyn SchedulerPort>;

    let subscriptions = Arc::new(SubscriptionService::new(
        registry,
        scheduler_port,
        messenger,
        Arc::clone(&motivation),
        SubscriptionConfig {
            time: daily_time,
            timezone,
        },
    ));

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("🚀 Starting dispatcher");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![BotServices::new(subscriptions, motivation)])
        .error_handler(LoggingErrorHandler::with_custom_text("Update handler failed"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!(jobs = scheduler.job_count(), "Stopping scheduler");
    scheduler.shutdown().await?;
    info!("👋 RunSpark stopped");
    Ok(())
}
