//! Telegram adapter - Implements MessengerPort over the Bot API

use application::error::ApplicationError;
use application::ports::{MessengerPort, SynthesizedSpeech};
use async_trait::async_trait;
use domain::ChatId;
use teloxide::prelude::*;
use teloxide::types::{ChatId as TelegramChatId, InputFile, ParseMode};
use teloxide::RequestError;
use tracing::{debug, instrument};

/// Characters MarkdownV2 reserves, minus the `*` bold marker
const MARKDOWN_V2_RESERVED: [char; 18] = [
    '\\', '_', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escape text for MarkdownV2 while keeping `*bold*` markers intact
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Messenger backed by a teloxide `Bot`
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl std::fmt::Debug for TelegramMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramMessenger")
            .field("api_url", &self.bot.api_url().as_str())
            .finish_non_exhaustive()
    }
}

impl TelegramMessenger {
    /// Create a messenger using an existing bot handle
    #[must_use]
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }

    const fn target(chat_id: ChatId) -> TelegramChatId {
        TelegramChatId(chat_id.as_i64())
    }

    fn map_error(err: RequestError) -> ApplicationError {
        match err {
            RequestError::RetryAfter(_) => ApplicationError::RateLimited,
            other => ApplicationError::Messaging(other.to_string()),
        }
    }

    fn voice_filename(mime_type: &str) -> &'static str {
        match mime_type {
            "audio/ogg" | "audio/opus" => "motivation.ogg",
            "audio/wav" => "motivation.wav",
            _ => "motivation.mp3",
        }
    }
}

#[async_trait]
impl MessengerPort for TelegramMessenger {
    #[instrument(skip(self, text), fields(chat_id = %chat_id))]
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), ApplicationError> {
        self.bot
            .send_message(Self::target(chat_id), text)
            .await
            .map_err(Self::map_error)?;
        debug!("Text message sent");
        Ok(())
    }

    #[instrument(skip(self, text), fields(chat_id = %chat_id))]
    async fn send_formatted(&self, chat_id: ChatId, text: &str) -> Result<(), ApplicationError> {
        self.bot
            .send_message(Self::target(chat_id), escape_markdown_v2(text))
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(Self::map_error)?;
        debug!("Formatted message sent");
        Ok(())
    }

    #[instrument(skip(self, speech), fields(chat_id = %chat_id, audio_size = speech.audio_data.len()))]
    async fn send_voice(
        &self,
        chat_id: ChatId,
        speech: SynthesizedSpeech,
    ) -> Result<(), ApplicationError> {
        let filename = Self::voice_filename(&speech.mime_type);
        let file = InputFile::memory(speech.audio_data).file_name(filename);

        self.bot
            .send_voice(Self::target(chat_id), file)
            .await
            .map_err(Self::map_error)?;
        debug!("Voice message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keeps_bold_markers() {
        assert_eq!(escape_markdown_v2("*Цель: 10 км*"), "*Цель: 10 км*");
    }

    #[test]
    fn escape_reserved_characters() {
        assert_eq!(escape_markdown_v2("-2.5°!"), "\\-2\\.5°\\!");
        assert_eq!(escape_markdown_v2("(a_b)"), "\\(a\\_b\\)");
        assert_eq!(escape_markdown_v2("a\\b"), "a\\\\b");
    }

    #[test]
    fn escape_leaves_cyrillic_and_emoji() {
        let text = "🏃 Бежим сегодня";
        assert_eq!(escape_markdown_v2(text), text);
    }

    #[test]
    fn voice_filename_follows_mime_type() {
        assert_eq!(TelegramMessenger::voice_filename("audio/mpeg"), "motivation.mp3");
        assert_eq!(TelegramMessenger::voice_filename("audio/ogg"), "motivation.ogg");
        assert_eq!(TelegramMessenger::voice_filename("audio/wav"), "motivation.wav");
    }

    #[test]
    fn target_keeps_chat_id() {
        assert_eq!(TelegramMessenger::target(ChatId::new(-100_42)), TelegramChatId(-100_42));
    }

    #[test]
    fn debug_hides_token() {
        let messenger = TelegramMessenger::new(Bot::new("123:secret"));
        let debug_str = format!("{messenger:?}");
        assert!(debug_str.contains("TelegramMessenger"));
        assert!(!debug_str.contains("secret"));
    }
}
