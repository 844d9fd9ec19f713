//! Google Translate speech provider
//!
//! Implements `TextToSpeech` over the public `translate_tts` endpoint, the
//! same protocol the gTTS tool speaks. The endpoint only accepts short
//! requests, so text is split into chunks that are fetched in order and
//! whose MP3 segments are concatenated.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat};

const CLIENT_ID: &str = "tw-ob";
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Characters that end a sentence when followed by whitespace or end of text
const SENTENCE_ENDS: [char; 5] = ['.', '!', '?', '…', '\n'];

/// Split text into chunks of at most `max_chars` characters
///
/// Whole sentences are packed together while they fit. Longer sentences are
/// split between words, and a single word longer than the limit is cut.
/// Returns no chunks for blank text.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences(text) {
        let sentence = normalize_whitespace(sentence);
        if sentence.is_empty() {
            continue;
        }

        let joined_len = if current.is_empty() {
            char_len(&sentence)
        } else {
            char_len(&current) + 1 + char_len(&sentence)
        };
        if joined_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&sentence);
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if char_len(&sentence) <= max_chars {
            current = sentence;
        } else {
            split_words(&sentence, max_chars, &mut chunks);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sentence slices, each keeping its terminating punctuation
fn sentences(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !SENTENCE_ENDS.contains(&c) {
            continue;
        }
        let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + c.len_utf8();
            result.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        result.push(&text[start..]);
    }
    result
}

/// Greedy word packing for a sentence longer than `max_chars`
fn split_words(sentence: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            chunks.extend(chars.chunks(max_chars).map(|piece| piece.iter().collect::<String>()));
            continue;
        }

        let joined_len = if current.is_empty() {
            word_len
        } else {
            char_len(&current) + 1 + word_len
        };
        if joined_len > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
}

/// Google Translate speech provider
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTranslateTts {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch every chunk in order and concatenate the audio
    async fn fetch_all(&self, chunks: &[String], language: &str) -> Result<AudioData, SpeechError> {
        let total = chunks.len();
        let mut audio = Vec::new();
        let mut format = AudioFormat::Mp3;

        for (idx, chunk) in chunks.iter().enumerate() {
            let (bytes, chunk_format) = self.fetch_chunk(chunk, language, idx, total).await?;
            format = chunk_format;
            audio.extend_from_slice(&bytes);
        }

        Ok(AudioData::new(audio, format))
    }

    /// Fetch the audio for one chunk
    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<(Bytes, AudioFormat), SpeechError> {
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = char_len(chunk).to_string();

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", CLIENT_ID),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .header(REFERER, format!("{}/", self.config.base_url.trim_end_matches('/')))
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if status.is_server_error() {
            return Err(SpeechError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SpeechError::SynthesisFailed(format!("HTTP {status}")));
        }

        let format = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(AudioFormat::from_mime_type)
            .unwrap_or(AudioFormat::Mp3);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(format!(
                "Empty audio for chunk {idx}"
            )));
        }

        Ok((bytes, format))
    }
}

#[async_trait]
impl TextToSpeech for GoogleTranslateTts {
    #[instrument(skip(self, text), fields(text_len = text.chars().count(), language = %language))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        let chunks = split_text(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::InvalidInput("Text cannot be empty".to_string()));
        }

        let language = if language.trim().is_empty() {
            self.config.language.as_str()
        } else {
            language
        };

        debug!(chunks = chunks.len(), "Synthesizing speech");

        let timeout_ms = self.config.timeout_ms;
        let audio = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.fetch_all(&chunks, language),
        )
        .await
        .map_err(|_| SpeechError::Timeout(timeout_ms))??;

        debug!(audio_size = audio.size_bytes(), "Speech synthesis complete");
        Ok(audio)
    }

    async fn is_available(&self) -> bool {
        match self.fetch_chunk("ок", &self.config.language, 0, 1).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Speech service availability check failed");
                false
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "google-translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_text("Вперёд!", 100), vec!["Вперёд!".to_string()]);
    }

    #[test]
    fn blank_text_has_no_chunks() {
        assert!(split_text("", 100).is_empty());
        assert!(split_text("  \n\n ", 100).is_empty());
    }

    #[test]
    fn sentences_are_packed_while_they_fit() {
        let chunks = split_text("Раз. Два. Три.", 9);
        assert_eq!(chunks, vec!["Раз. Два.", "Три."]);
    }

    #[test]
    fn decimal_point_is_not_a_sentence_end() {
        let chunks = split_text("А 5.0° — идеально.", 100);
        assert_eq!(chunks, vec!["А 5.0° — идеально."]);
        assert_eq!(sentences("А 5.0° ок. Да"), vec!["А 5.0° ок.", " Да"]);
    }

    #[test]
    fn long_sentence_splits_between_words() {
        let text = "один два три четыре пять шесть";
        let chunks = split_text(text, 10);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn overlong_word_is_cut() {
        let chunks = split_text("абвгдеёжзий", 4);
        assert_eq!(chunks, vec!["абвг", "деёж", "зий"]);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 10 Cyrillic letters are 20 bytes
        let chunks = split_text("абвгдежзий", 10);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn blank_lines_separate_sentences() {
        let chunks = split_text("Первый абзац\n\nВторой абзац", 15);
        assert_eq!(chunks, vec!["Первый абзац", "Второй абзац"]);
    }

    #[test]
    fn provider_rejects_invalid_config() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            GoogleTranslateTts::new(config),
            Err(SpeechError::Configuration(_))
        ));
    }

    #[test]
    fn tts_url_trims_trailing_slash() {
        let config = SpeechConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        };
        let provider = GoogleTranslateTts::new(config).unwrap();
        assert_eq!(provider.tts_url(), "http://localhost:9000/translate_tts");
    }
}
