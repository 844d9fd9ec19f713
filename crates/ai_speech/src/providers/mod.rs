//! Speech provider implementations

pub mod google_translate;

pub use google_translate::GoogleTranslateTts;
