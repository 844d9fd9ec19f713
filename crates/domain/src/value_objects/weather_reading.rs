//! Weather reading value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current conditions at the bot's location
///
/// Produced fresh for every message and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Short condition label, e.g. "ясно" or "слабый снег"
    pub description: String,
}

impl WeatherReading {
    /// Description used when the provider could not be reached
    pub const UNAVAILABLE_DESCRIPTION: &'static str = "погода недоступна";

    /// Create a reading
    #[must_use]
    pub fn new(temperature: f64, description: impl Into<String>) -> Self {
        Self {
            temperature,
            description: description.into(),
        }
    }

    /// Fallback reading: 0 °C, "weather unavailable"
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(0.0, Self::UNAVAILABLE_DESCRIPTION)
    }

    /// Whether this is the fallback reading
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.description == Self::UNAVAILABLE_DESCRIPTION
    }
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:.1}°", self.description, self.temperature)
    }
}
