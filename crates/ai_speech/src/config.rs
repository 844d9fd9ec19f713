//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Configuration for the speech synthesis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default language code for synthesis
    #[serde(default = "default_language")]
    pub language: String,

    /// Time budget for a whole synthesis call in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum characters per request; longer text is split
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_language() -> String {
    "ru".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_chunk_chars() -> usize {
    100
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timeout_ms: default_timeout_ms(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Base URL must not be empty".to_string());
        }

        if self.language.trim().is_empty() {
            return Err("Language must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_chunk_chars < 10 {
            return Err(format!(
                "Chunk size must be at least 10 characters, got {}",
                self.max_chunk_chars
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(config.base_url, "https://translate.google.com");
        assert_eq!(config.language, "ru");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_chunk_chars, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_empty_language() {
        let config = SpeechConfig {
            language: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_tiny_chunks() {
        let config = SpeechConfig {
            max_chunk_chars: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            language = "en"
            timeout_ms = 60000
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.base_url, "https://translate.google.com");
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_ms, 60000);
        assert_eq!(config.max_chunk_chars, 100);
    }
}
