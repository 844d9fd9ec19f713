//! Speech adapter - Implements SpeechPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{GoogleTranslateTts, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesizedSpeech};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for speech synthesis over any `TextToSpeech` provider
pub struct SpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}

impl SpeechAdapter {
    /// Create an adapter backed by Google Translate speech
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleTranslateTts::new(config).map_err(Self::map_error)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Create an adapter over an existing provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::InvalidInput(e) => {
                ApplicationError::Internal(format!("Nothing to synthesize: {e}"))
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Speech service timeout after {ms}ms"))
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(provider = self.provider.provider_name(), text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesizedSpeech, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, language)
            .await
            .map_err(Self::map_error)?;

        debug!(
            audio_size = audio.size_bytes(),
            mime_type = audio.mime_type(),
            "Speech synthesized"
        );

        let mime_type = audio.mime_type();
        Ok(SynthesizedSpeech::new(audio.into_data(), mime_type))
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_speech::{AudioData, AudioFormat};

    struct StubTts {
        result: fn() -> Result<AudioData, SpeechError>,
    }

    #[async_trait]
    impl TextToSpeech for StubTts {
        async fn synthesize(&self, _text: &str, _language: &str) -> Result<AudioData, SpeechError> {
            (self.result)()
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    fn adapter(result: fn() -> Result<AudioData, SpeechError>) -> SpeechAdapter {
        SpeechAdapter::with_provider(Arc::new(StubTts { result }))
    }

    #[tokio::test]
    async fn synthesize_carries_audio_and_mime_type() {
        let adapter = adapter(|| Ok(AudioData::new(vec![0xFF, 0xFB], AudioFormat::Mp3)));

        let speech = adapter.synthesize("Бежим", "ru").await.unwrap();

        assert_eq!(speech.audio_data, vec![0xFF, 0xFB]);
        assert_eq!(speech.mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn timeout_maps_to_external_service() {
        let adapter = adapter(|| Err(SpeechError::Timeout(30000)));

        let err = adapter.synthesize("Бежим", "ru").await.unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.to_string().contains("30000"));
    }

    #[tokio::test]
    async fn rate_limit_maps_to_rate_limited() {
        let adapter = adapter(|| Err(SpeechError::RateLimited));
        let err = adapter.synthesize("Бежим", "ru").await.unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[tokio::test]
    async fn is_available_delegates_to_provider() {
        let adapter = adapter(|| Ok(AudioData::new(vec![1], AudioFormat::Mp3)));
        assert!(adapter.is_available().await);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SpeechConfig {
            language: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            SpeechAdapter::new(config),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn debug_shows_provider_name() {
        let adapter = adapter(|| Err(SpeechError::RateLimited));
        assert!(format!("{adapter:?}").contains("stub"));
    }
}
