//! Error types for media-session management

use crate::commands::SubscriptionId;
use thiserror::Error;

/// Media-session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The presentation surface rejected an operation
    #[error("Presentation surface error: {0}")]
    Surface(String),

    /// The host could not start or promote the foreground service
    #[error("Foreground service error: {0}")]
    Foreground(String),

    /// No listener is registered under the given subscription handle
    #[error("Subscription not registered: {0}")]
    NotSubscribed(SubscriptionId),
}

impl SessionError {
    /// Create a transient surface error
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Create an unrecoverable foreground-service error
    pub fn foreground(msg: impl Into<String>) -> Self {
        Self::Foreground(msg.into())
    }
}

/// Result type for media-session operations
pub type Result<T> = std::result::Result<T, SessionError>;
