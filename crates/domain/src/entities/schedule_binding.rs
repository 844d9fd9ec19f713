//! Schedule binding entity - the daily trigger attached to a chat

use serde::{Deserialize, Serialize};

use crate::value_objects::{ChatId, DailyTime, Timezone};

/// Daily trigger registered for a chat by the `start` command
///
/// At most one binding exists per chat; starting again replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBinding {
    /// Chat that receives the prompt
    pub chat_id: ChatId,
    /// Local time at which the prompt fires
    pub time: DailyTime,
    /// Zone the time is interpreted in
    pub timezone: Timezone,
}

impl ScheduleBinding {
    /// Create a binding
    #[must_use]
    pub const fn new(chat_id: ChatId, time: DailyTime, timezone: Timezone) -> Self {
        Self {
            chat_id,
            time,
            timezone,
        }
    }

    /// Cron expression for the trigger
    #[must_use]
    pub fn cron_expression(&self) -> String {
        self.time.cron_expression()
    }
}
