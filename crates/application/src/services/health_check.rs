//! Startup dependency check
//!
//! Checks the weather and speech services once before the bot starts
//! polling. An unreachable service only degrades the morning message
//! (fallback weather, voice notice), so failures are reported, not fatal.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::{SpeechPort, WeatherPort};

/// Default time allowed for each dependency check
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Reachability of the external services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyHealth {
    /// Weather provider answered
    pub weather: bool,
    /// Speech provider answered
    pub speech: bool,
}

impl DependencyHealth {
    /// Whether every dependency answered
    pub const fn all_healthy(&self) -> bool {
        self.weather && self.speech
    }
}

async fn check_one(name: &str, limit: Duration, check: impl Future<Output = bool>) -> bool {
    match timeout(limit, check).await {
        Ok(true) => {
            debug!(service = name, "Dependency reachable");
            true
        },
        Ok(false) => {
            warn!(service = name, "Dependency unreachable");
            false
        },
        Err(_) => {
            warn!(
                service = name,
                timeout_secs = limit.as_secs_f64(),
                "Dependency check timed out"
            );
            false
        },
    }
}

/// Check weather and speech, warning about each one that is down
#[instrument(skip_all)]
pub async fn check_dependencies(
    weather: &dyn WeatherPort,
    speech: &dyn SpeechPort,
    limit: Duration,
) -> DependencyHealth {
    DependencyHealth {
        weather: check_one("weather", limit, weather.is_available()).await,
        speech: check_one("speech", limit, speech.is_available()).await,
    }
}
