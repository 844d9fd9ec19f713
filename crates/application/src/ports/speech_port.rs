//! Speech port - Interface for text-to-speech synthesis

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Audio produced by a synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedSpeech {
    /// Encoded audio bytes
    pub audio_data: Vec<u8>,
    /// MIME type of `audio_data`, e.g. "audio/mpeg"
    pub mime_type: String,
}

impl SynthesizedSpeech {
    /// Create synthesized speech
    #[must_use]
    pub fn new(audio_data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            audio_data,
            mime_type: mime_type.into(),
        }
    }

    /// Whether there is no audio
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audio_data.is_empty()
    }
}

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize speech from text (Text-to-Speech)
    ///
    /// # Arguments
    /// * `text` - Plain text without markup
    /// * `language` - Language code, e.g. "ru"
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesizedSpeech, ApplicationError>;

    /// Check if the speech service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SpeechPort) {}

    #[test]
    fn synthesized_speech_is_empty() {
        assert!(SynthesizedSpeech::new(vec![], "audio/mpeg").is_empty());
        assert!(!SynthesizedSpeech::new(vec![0xFF, 0xFB], "audio/mpeg").is_empty());
    }
}
