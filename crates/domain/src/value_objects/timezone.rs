//! Timezone value object

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone
///
/// The bot runs in exactly one zone; every time-derived value (season,
/// weekday, trigger time) is computed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not in the IANA database
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        Tz::from_str(name)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// Get the IANA name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Get the underlying `chrono-tz` zone
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Convert a UTC instant into this zone
    #[must_use]
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }

    /// Asia/Vladivostok
    #[must_use]
    pub const fn vladivostok() -> Self {
        Self(Tz::Asia__Vladivostok)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::vladivostok()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_valid() {
        let tz = Timezone::parse("Europe/Berlin").expect("valid zone");
        assert_eq!(tz.as_str(), "Europe/Berlin");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Timezone::parse("Mars/Olympus"),
            Err(DomainError::InvalidTimezone(name)) if name == "Mars/Olympus"
        ));
    }

    #[test]
    fn test_default_is_vladivostok() {
        assert_eq!(Timezone::default().as_str(), "Asia/Vladivostok");
    }

    #[test]
    fn test_localize_applies_offset() {
        // Vladivostok is UTC+10 all year
        let instant = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
        let local = Timezone::vladivostok().localize(instant);
        assert_eq!(local.hour(), 4);
    }

    #[test]
    fn test_serialization() {
        let tz = Timezone::vladivostok();
        let json = serde_json::to_string(&tz).expect("serialize");
        assert_eq!(json, "\"Asia/Vladivostok\"");

        let deserialized: Timezone = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tz, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_unknown_zone() {
        let result: Result<Timezone, _> = serde_json::from_str("\"Nowhere/Land\"");
        assert!(result.is_err());
    }
}
