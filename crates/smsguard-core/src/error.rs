//! Error types for SMSGuard

/// Result type alias using SMSGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SMSGuard operations
///
/// Classification itself is infallible. These errors come from the edges:
/// keyword management, configuration and message sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Keyword rejected by the keyword store
    #[error("keyword error: {0}")]
    Keyword(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Message source errors
    #[error("message source error: {0}")]
    Source(String),

    /// Filesystem/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new keyword error
    pub fn keyword(msg: impl Into<String>) -> Self {
        Self::Keyword(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new message source error
    pub fn message_source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
