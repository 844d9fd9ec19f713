//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod speech_adapter;
mod telegram_adapter;
mod weather_adapter;

pub use speech_adapter::SpeechAdapter;
pub use telegram_adapter::{TelegramMessenger, escape_markdown_v2};
pub use weather_adapter::WeatherAdapter;
