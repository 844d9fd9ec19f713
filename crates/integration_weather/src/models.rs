//! Weather data models
//!
//! Types for representing current conditions from the Open-Meteo API.

use serde::{Deserialize, Serialize};

/// Weather condition derived from WMO weather codes
///
/// Only the codes the bot describes get their own variant; everything else
/// is [`WeatherCondition::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Light drizzle (WMO 51)
    LightDrizzle,
    /// Moderate drizzle (WMO 53)
    ModerateDrizzle,
    /// Dense drizzle (WMO 55)
    DenseDrizzle,
    /// Slight rain (WMO 61)
    SlightRain,
    /// Rain (WMO 63)
    Rain,
    /// Heavy rain (WMO 65)
    HeavyRain,
    /// Slight snow fall (WMO 71)
    SlightSnow,
    /// Moderate snow fall (WMO 73)
    ModerateSnow,
    /// Heavy snow fall (WMO 75)
    HeavySnow,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Any other code
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u16) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            61 => Self::SlightRain,
            63 => Self::Rain,
            65 => Self::HeavyRain,
            71 => Self::SlightSnow,
            73 => Self::ModerateSnow,
            75 => Self::HeavySnow,
            95 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Russian description used in messages
    ///
    /// Drizzle is described as rain so the rain line picks it up.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "ясно",
            Self::MainlyClear => "преимущественно ясно",
            Self::PartlyCloudy => "переменная облачность",
            Self::Overcast => "облачно",
            Self::LightDrizzle => "слабый дождь",
            Self::ModerateDrizzle => "умеренный дождь",
            Self::DenseDrizzle | Self::HeavyRain => "сильный дождь",
            Self::SlightRain => "небольшой дождь",
            Self::Rain => "дождь",
            Self::SlightSnow => "слабый снег",
            Self::ModerateSnow => "умеренный снег",
            Self::HeavySnow => "сильный снег",
            Self::Thunderstorm => "гроза",
            Self::Unknown => "погода неизвестна",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO weather code as reported
    pub weather_code: u16,
    /// Condition derived from the code
    pub condition: WeatherCondition,
}

impl CurrentConditions {
    /// Build from raw API values
    #[must_use]
    pub const fn new(temperature: f64, weather_code: u16) -> Self {
        Self {
            temperature,
            weather_code,
            condition: WeatherCondition::from_wmo_code(weather_code),
        }
    }

    /// Russian description of the condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.condition.description()
    }
}

// ============================================================================
// Open-Meteo API response types (internal)
// ============================================================================

/// Top-level API response
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current: Option<CurrentData>,
}

/// `current` block of the API response
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: f64,
    pub weather_code: u16,
}
