//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the `TextToSpeech` trait and an implementation backed by the
//! Google Translate speech endpoint.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{GoogleTranslateTts, SpeechConfig, TextToSpeech};
//!
//! let provider = GoogleTranslateTts::new(SpeechConfig::default())?;
//! let audio = provider.synthesize("Доброе утро!", "ru").await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::google_translate::{GoogleTranslateTts, split_text};
pub use types::{AudioData, AudioFormat};
