//! Error types for port operations.

/// Definition source errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading the underlying store failed - includes the location for tracing.
    #[error("I/O error reading {location}: {message}")]
    Io { location: String, message: String },

    /// Deserialization of the stored definitions failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The source cannot serve definitions right now.
    #[error("Definition source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Create an Io error with location context.
    pub fn io(location: impl ToString, message: impl ToString) -> Self {
        Self::Io {
            location: location.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }
}
