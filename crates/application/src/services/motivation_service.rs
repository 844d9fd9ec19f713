//! Motivation service - The daily mood prompt flow
//!
//! Drives one chat through the cycle:
//! 1. Send the mood prompt (daily trigger or `test` command)
//! 2. Treat the next text from that chat as the mood
//! 3. Look up weather, derive season and weekend flag, compose the message
//! 4. Deliver the text, then the same text as synthesized speech
//!
//! Every external call is awaited before the next one starts.

use std::{fmt, sync::Arc};

use chrono::Datelike;
use domain::{ChatId, Season, Timezone};
use tracing::{debug, info, instrument, warn};

use crate::{
    chat_registry::ChatRegistry,
    error::ApplicationError,
    ports::{ClockPort, MessengerPort, SpeechPort},
    services::{
        WeatherLookup,
        motivation_composer::{compose_message, is_weekend, plain_text},
    },
};

/// Mood question sent on every trigger
pub const MOOD_PROMPT: &str = "🌅 Доброе утро! Как настроение? (Ответь: отлично / нормально / плохо)";

/// Notice sent when the voice message cannot be produced or delivered
pub const VOICE_UNAVAILABLE: &str = "🔊 Голос временно недоступен.";

/// Reply to text that arrives while no prompt is outstanding
pub const AWAITING_TRIGGER_HINT: &str =
    "Я пришлю вопрос о настроении утром. Напиши /test — чтобы попробовать сейчас.";

/// What happened to an incoming text message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The text was the mood reply and a motivation message went out
    Delivered,
    /// No prompt was outstanding; only the hint was sent
    Ignored,
}

/// Configuration for the motivation flow
#[derive(Debug, Clone)]
pub struct MotivationConfig {
    /// Zone that season and weekday are computed in
    pub timezone: Timezone,
    /// Language code passed to speech synthesis
    pub language: String,
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            timezone: Timezone::default(),
            language: "ru".to_string(),
        }
    }
}

/// Service running the prompt → mood → motivation cycle
pub struct MotivationService {
    registry: Arc<ChatRegistry>,
    weather: WeatherLookup,
    speech: Arc<dyn SpeechPort>,
    messenger: Arc<dyn MessengerPort>,
    clock: Arc<dyn ClockPort>,
    config: MotivationConfig,
}

impl fmt::Debug for MotivationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotivationService")
            .field("weather", &self.weather)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MotivationService {
    /// Create a new motivation service
    pub fn new(
        registry: Arc<ChatRegistry>,
        weather: WeatherLookup,
        speech: Arc<dyn SpeechPort>,
        messenger: Arc<dyn MessengerPort>,
        clock: Arc<dyn ClockPort>,
        config: MotivationConfig,
    ) -> Self {
        Self {
            registry,
            weather,
            speech,
            messenger,
            clock,
            config,
        }
    }

    /// Send the mood prompt and wait for the chat's next message
    #[instrument(skip(self), fields(chat_id = %chat_id))]
    pub async fn send_prompt(&self, chat_id: ChatId) -> Result<(), ApplicationError> {
        // Mark first so a fast reply is not mistaken for idle chatter
        self.registry.mark_prompted(chat_id);

        if let Err(e) = self.messenger.send_text(chat_id, MOOD_PROMPT).await {
            self.registry.take_mood_slot(chat_id);
            warn!(error = %e, "Failed to send mood prompt");
            return Err(e);
        }

        info!("Mood prompt sent");
        Ok(())
    }

    /// Handle a plain text message from a chat
    ///
    /// Only the first message after a prompt is treated as the mood.
    #[instrument(skip(self, text), fields(chat_id = %chat_id))]
    pub async fn handle_message(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> Result<ReplyOutcome, ApplicationError> {
        if !self.registry.take_mood_slot(chat_id) {
            debug!("No prompt outstanding, sending hint");
            self.messenger
                .send_text(chat_id, AWAITING_TRIGGER_HINT)
                .await?;
            return Ok(ReplyOutcome::Ignored);
        }

        self.deliver_motivation(chat_id, text).await?;
        Ok(ReplyOutcome::Delivered)
    }

    /// Compose and deliver the motivation message for a mood
    ///
    /// Returns the composed message. A text delivery failure is an error;
    /// a voice failure is replaced by a notice.
    #[instrument(skip(self, mood), fields(chat_id = %chat_id))]
    pub async fn deliver_motivation(
        &self,
        chat_id: ChatId,
        mood: &str,
    ) -> Result<String, ApplicationError> {
        let weather = self.weather.get_weather().await;

        let now = self.config.timezone.localize(self.clock.now());
        let season = Season::of(&now);
        let weekend = is_weekend(now.weekday());

        let message = compose_message(mood, &weather, season, weekend);
        info!(
            temperature = weather.temperature,
            weather_fallback = weather.is_unavailable(),
            season = %season,
            weekend,
            "Motivation composed"
        );

        self.messenger.send_formatted(chat_id, &message).await?;
        self.deliver_voice(chat_id, &plain_text(&message)).await;

        Ok(message)
    }

    /// Synthesize and send the voice version, or the notice on failure
    async fn deliver_voice(&self, chat_id: ChatId, text: &str) {
        let result = match self.speech.synthesize(text, &self.config.language).await {
            Ok(speech) => self.messenger.send_voice(chat_id, speech).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => debug!("Voice message sent"),
            Err(e) => {
                warn!(error = %e, "Voice delivery failed");
                if let Err(e) = self.messenger.send_text(chat_id, VOICE_UNAVAILABLE).await {
                    warn!(error = %e, "Failed to send voice notice");
                }
            },
        }
    }
}
