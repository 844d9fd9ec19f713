//! Mood tone value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of how the user says they feel
///
/// Only selects the opening line of a motivation message; the raw
/// mood text is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTone {
    /// Tired, sleepy or unwilling
    Fatigued,
    /// Okay, average, the usual
    Steady,
    /// Anything else, including empty text
    #[default]
    Eager,
}

impl fmt::Display for MoodTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatigued => write!(f, "fatigued"),
            Self::Steady => write!(f, "steady"),
            Self::Eager => write!(f, "eager"),
        }
    }
}
