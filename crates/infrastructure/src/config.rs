//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, `RUNSPARK_`-prefixed environment variables (`__` separates nested
//! keys, e.g. `RUNSPARK_SCHEDULE__HOUR=5`) and finally the plain `BOT_TOKEN`
//! variable.

use std::fmt;

use ai_speech::SpeechConfig;
use domain::{DailyTime, DomainError, GeoLocation, Timezone};
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "RUNSPARK";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No bot token in file, environment or `BOT_TOKEN`
    #[error("Telegram bot token is missing; set BOT_TOKEN or telegram.bot_token")]
    MissingToken,

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Telegram configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Where the weather is looked up and which zone the day is counted in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude in degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// IANA zone name
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

const fn default_latitude() -> f64 {
    43.1056
}

const fn default_longitude() -> f64 {
    131.8735
}

fn default_timezone() -> String {
    "Asia/Vladivostok".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

impl LocationConfig {
    /// Validated coordinates
    pub fn geo_location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.latitude, self.longitude)
    }

    /// Validated zone
    pub fn zone(&self) -> Result<Timezone, DomainError> {
        Timezone::parse(&self.timezone)
    }
}

/// Local time of the daily prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Hour, 0-23
    #[serde(default = "default_hour")]
    pub hour: u32,

    /// Minute, 0-59
    #[serde(default)]
    pub minute: u32,
}

const fn default_hour() -> u32 {
    4
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            hour: default_hour(),
            minute: 0,
        }
    }
}

impl ScheduleConfig {
    /// Validated trigger time
    pub fn daily_time(&self) -> Result<DailyTime, DomainError> {
        DailyTime::new(self.hour, self.minute)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Location and zone
    #[serde(default)]
    pub location: LocationConfig,

    /// Daily prompt time
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Open-Meteo client configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// `path` may omit the extension; a missing file is not an error.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., RUNSPARK_SCHEDULE__HOUR)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("telegram.bot_token", std::env::var(BOT_TOKEN_ENV).ok())?;

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the bot needs at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bot_token()?;
        self.location.geo_location()?;
        self.location.zone()?;
        self.schedule.daily_time()?;
        self.speech.validate().map_err(ConfigError::Invalid)?;
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The bot token, if it is set and non-blank
    pub fn bot_token(&self) -> Result<&SecretString, ConfigError> {
        self.telegram
            .bot_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn with_token() -> AppConfig {
        AppConfig {
            telegram: TelegramConfig {
                bot_token: Some(SecretString::from("123:abc")),
            },
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_vladivostok_at_four() {
        let config = AppConfig::default();

        assert!((config.location.latitude - 43.1056).abs() < f64::EPSILON);
        assert!((config.location.longitude - 131.8735).abs() < f64::EPSILON);
        assert_eq!(config.location.timezone, "Asia/Vladivostok");
        assert_eq!(config.schedule.hour, 4);
        assert_eq!(config.schedule.minute, 0);
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.speech.language, "ru");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn validate_requires_token() {
        let config = AppConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut config = with_token();
        config.telegram.bot_token = Some(SecretString::from("   "));
        assert!(matches!(config.bot_token(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn validate_accepts_defaults_with_token() {
        assert!(with_token().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_timezone() {
        let mut config = with_token();
        config.location.timezone = "Mars/Olympus".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_bad_schedule() {
        let mut config = with_token();
        config.schedule.hour = 24;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_bad_coordinates() {
        let mut config = with_token();
        config.location.latitude = 91.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn debug_redacts_token() {
        let config = with_token();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("123:abc"));
    }

    #[test]
    fn token_is_not_serialized() {
        let json = serde_json::to_string(&with_token()).unwrap();
        assert!(!json.contains("123:abc"));
    }

    #[test]
    fn load_reads_file_values() {
        let file = write_config(
            r#"
            [telegram]
            bot_token = "987:file-token"

            [schedule]
            hour = 5
            minute = 30

            [location]
            timezone = "Europe/Moscow"

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.schedule.daily_time().unwrap().to_string(), "5:30");
        assert_eq!(config.location.zone().unwrap().as_str(), "Europe/Moscow");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.bot_token().is_ok());
        // Untouched sections keep their defaults
        assert_eq!(config.speech.max_chunk_chars, 100);
    }

    #[test]
    fn load_rejects_invalid_values_from_file() {
        let file = write_config(
            r#"
            [telegram]
            bot_token = "987:file-token"

            [schedule]
            hour = 25
            "#,
        );

        let result = AppConfig::load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
