//! Domain layer for RunSpark
//!
//! Contains the value objects, entities and errors of the daily motivation bot.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
