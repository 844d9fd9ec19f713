//! Weather lookup with degraded fallback

use std::{fmt, sync::Arc};

use domain::{GeoLocation, Timezone, WeatherReading};
use tracing::{debug, instrument, warn};

use crate::ports::WeatherPort;

/// Fetches current weather for the configured location
///
/// Any provider failure yields [`WeatherReading::unavailable`] so the daily
/// message always goes out.
pub struct WeatherLookup {
    port: Arc<dyn WeatherPort>,
    location: GeoLocation,
    timezone: Timezone,
}

impl fmt::Debug for WeatherLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherLookup")
            .field("location", &self.location)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl WeatherLookup {
    /// Create a lookup for a fixed location
    pub fn new(port: Arc<dyn WeatherPort>, location: GeoLocation, timezone: Timezone) -> Self {
        Self {
            port,
            location,
            timezone,
        }
    }

    /// Location the lookup queries
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Current reading, or the fallback on any error
    ///
    /// Calls the provider exactly once.
    #[instrument(skip(self), fields(location = %self.location))]
    pub async fn get_weather(&self) -> WeatherReading {
        match self
            .port
            .current_weather(&self.location, &self.timezone)
            .await
        {
            Ok(reading) => {
                debug!(
                    temperature = reading.temperature,
                    description = %reading.description,
                    "Weather fetched"
                );
                reading
            },
            Err(e) => {
                warn!(error = %e, "Weather lookup failed, using fallback");
                WeatherReading::unavailable()
            },
        }
    }
}
