//! Time-of-day value object for daily triggers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A wall-clock time of day (hour and minute) at which a daily trigger fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyTime {
    hour: u32,
    minute: u32,
}

impl DailyTime {
    /// Create a validated time of day
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeOfDay` if hour > 23 or minute > 59
    pub const fn new(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTimeOfDay { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Get the hour (0-23)
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Get the minute (0-59)
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Six-field cron expression (sec min hour day month weekday) firing daily at this time
    #[must_use]
    pub fn cron_expression(&self) -> String {
        format!("0 {} {} * * *", self.minute, self.hour)
    }
}

impl Default for DailyTime {
    /// 04:00, the early-run slot
    fn default() -> Self {
        Self { hour: 4, minute: 0 }
    }
}

impl fmt::Display for DailyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(DailyTime::new(0, 0).is_ok());
        assert!(DailyTime::new(23, 59).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            DailyTime::new(24, 0),
            Err(DomainError::InvalidTimeOfDay { hour: 24, minute: 0 })
        ));
        assert!(DailyTime::new(4, 60).is_err());
    }

    #[test]
    fn default_is_four_am() {
        let time = DailyTime::default();
        assert_eq!(time.hour(), 4);
        assert_eq!(time.minute(), 0);
    }

    #[test]
    fn cron_expression_has_seconds_field() {
        let time = DailyTime::new(4, 30).expect("valid");
        assert_eq!(time.cron_expression(), "0 30 4 * * *");
    }

    #[test]
    fn display_pads_minutes_only() {
        assert_eq!(DailyTime::new(4, 0).expect("valid").to_string(), "4:00");
        assert_eq!(DailyTime::new(18, 5).expect("valid").to_string(), "18:05");
    }
}
