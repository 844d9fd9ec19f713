//! Chat session entity - per-chat conversation state
//!
//! Every chat moves through a two-state cycle:
//!
//! ```text
//! AwaitingTrigger --prompt sent--> AwaitingMoodReply --mood received--> AwaitingTrigger
//! ```
//!
//! Only the first reply after a prompt counts as the mood.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::ScheduleBinding;
use crate::errors::DomainError;
use crate::value_objects::ChatId;

/// Event name reported when a reply arrives with no prompt outstanding
const MOOD_RECEIVED_EVENT: &str = "mood_received";

/// Phase of the mood conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
    /// Idle until the next daily trigger or `test` command
    #[default]
    AwaitingTrigger,
    /// Prompt was sent, the next text is the mood
    AwaitingMoodReply,
}

impl ChatPhase {
    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingTrigger => "awaiting_trigger",
            Self::AwaitingMoodReply => "awaiting_mood_reply",
        }
    }
}

impl fmt::Display for ChatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conversation state of a single chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    chat_id: ChatId,
    binding: Option<ScheduleBinding>,
    phase: ChatPhase,
}

impl ChatSession {
    /// New session with no binding, waiting for a trigger
    #[must_use]
    pub const fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            binding: None,
            phase: ChatPhase::AwaitingTrigger,
        }
    }

    /// Chat this session belongs to
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Daily trigger binding, if the chat subscribed
    #[must_use]
    pub const fn binding(&self) -> Option<&ScheduleBinding> {
        self.binding.as_ref()
    }

    /// Current conversation phase
    #[must_use]
    pub const fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// Attach a binding, returning the one it replaced
    pub fn bind(&mut self, binding: ScheduleBinding) -> Option<ScheduleBinding> {
        self.binding.replace(binding)
    }

    /// Record that the mood prompt went out
    ///
    /// A repeated prompt while still waiting keeps the session waiting.
    pub fn prompt_sent(&mut self) {
        self.phase = ChatPhase::AwaitingMoodReply;
    }

    /// Consume the pending mood slot
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if no prompt is outstanding
    pub fn mood_received(&mut self) -> Result<(), DomainError> {
        if !self.is_awaiting_mood() {
            return Err(DomainError::InvalidTransition {
                chat_id: self.chat_id.as_i64(),
                from: self.phase.as_str(),
                event: MOOD_RECEIVED_EVENT,
            });
        }
        self.phase = ChatPhase::AwaitingTrigger;
        Ok(())
    }

    /// Whether the next message is the mood reply
    #[must_use]
    pub const fn is_awaiting_mood(&self) -> bool {
        matches!(self.phase, ChatPhase::AwaitingMoodReply)
    }
}
