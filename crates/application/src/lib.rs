//! Application layer - Use cases and orchestration
//!
//! Contains the message composer, the mood prompt flow, subscriptions and
//! the port definitions that infrastructure adapters implement.

pub mod chat_registry;
pub mod error;
pub mod ports;
pub mod services;

pub use chat_registry::ChatRegistry;
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
