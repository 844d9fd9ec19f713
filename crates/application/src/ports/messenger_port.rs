//! Messenger port - Outbound interface to the messaging platform
//!
//! Inbound messages reach the application through the bot handlers; this port
//! only covers what the application sends.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::ChatId;

use crate::error::ApplicationError;
use crate::ports::SynthesizedSpeech;

/// Port for sending messages to a chat
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Send plain text, delivered verbatim
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), ApplicationError>;

    /// Send text containing `*bold*` emphasis
    ///
    /// The adapter is responsible for escaping everything else for the platform.
    async fn send_formatted(&self, chat_id: ChatId, text: &str) -> Result<(), ApplicationError>;

    /// Send synthesized audio as a voice message
    async fn send_voice(
        &self,
        chat_id: ChatId,
        speech: SynthesizedSpeech,
    ) -> Result<(), ApplicationError>;
}
