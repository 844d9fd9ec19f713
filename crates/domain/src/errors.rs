//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Hour or minute outside of a valid time of day
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// A chat session received an event its current phase does not accept
    #[error("Invalid transition for chat {chat_id}: {event} while {from}")]
    InvalidTransition {
        chat_id: i64,
        from: &'static str,
        event: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_time_of_day_message_is_zero_padded() {
        let err = DomainError::InvalidTimeOfDay { hour: 7, minute: 5 };
        assert_eq!(err.to_string(), "Invalid time of day: 07:05");
    }

    #[test]
    fn invalid_timezone_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn invalid_transition_message() {
        let err = DomainError::InvalidTransition {
            chat_id: 42,
            from: "awaiting_trigger",
            event: "mood_received",
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition for chat 42: mood_received while awaiting_trigger"
        );
    }
}
