//! Application services - Use case implementations

mod health_check;
pub mod mood_classifier;
pub mod motivation_composer;
mod motivation_service;
mod subscription_service;
mod weather_lookup;

pub use health_check::{DEFAULT_CHECK_TIMEOUT, DependencyHealth, check_dependencies};
pub use mood_classifier::classify_mood;
pub use motivation_composer::{compose_message, is_weekend, plain_text};
pub use motivation_service::{
    AWAITING_TRIGGER_HINT, MOOD_PROMPT, MotivationConfig, MotivationService, ReplyOutcome,
    VOICE_UNAVAILABLE,
};
pub use subscription_service::{SubscriptionConfig, SubscriptionService, greeting};
pub use weather_lookup::WeatherLookup;
