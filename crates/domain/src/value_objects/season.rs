//! Calendar season value object

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meteorological season derived from the calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// December, January, February
    Winter,
    /// March, April, May
    Spring,
    /// June, July, August
    Summer,
    /// September, October, November
    Autumn,
}

impl Season {
    /// All seasons in calendar order starting from winter
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Autumn];

    /// Season for a 1-based month number
    ///
    /// Anything outside 12, 1..=8 falls through to autumn.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    /// Season of the given date
    #[must_use]
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self::from_month(date.month())
    }

    /// Russian label used in messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Winter => "зима",
            Self::Spring => "весна",
            Self::Summer => "лето",
            Self::Autumn => "осень",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
