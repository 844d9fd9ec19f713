//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
///
/// # Example
///
/// ```ignore
/// use ai_speech::TextToSpeech;
///
/// async fn create_voice_message(
///     tts: &impl TextToSpeech,
///     text: &str,
/// ) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(text, "ru").await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Plain text to synthesize
    /// * `language` - Language code, e.g. "ru"
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Check if the TTS service is available
    async fn is_available(&self) -> bool;

    /// Name of the provider for logs
    fn provider_name(&self) -> &'static str;
}
