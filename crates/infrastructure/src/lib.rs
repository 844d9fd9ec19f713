//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains adapters for the weather provider, speech synthesis and
//! Telegram, plus the daily scheduler, system clock and configuration.

pub mod adapters;
pub mod clock;
pub mod config;
pub mod scheduler;

pub use adapters::*;
pub use clock::SystemClock;
pub use config::{
    AppConfig, ConfigError, LocationConfig, LogFormat, LoggingConfig, ScheduleConfig,
    TelegramConfig,
};
pub use scheduler::{DailyScheduler, SchedulerError, TriggerCallback, trigger_callback, validate_cron};
