//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (weather provider, speech engine)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Messaging platform rejected or failed a send
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// Daily trigger could not be registered
    #[error("Scheduling error: {0}")]
    Scheduling(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited
                | ApplicationError::ExternalService(_)
                | ApplicationError::Messaging(_)
        )
    }
}
