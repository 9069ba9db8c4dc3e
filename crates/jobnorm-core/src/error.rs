use thiserror::Error;

/// Error types for payload normalization.
///
/// Classification and parsing never produce these; they are reserved for
/// structural problems an adapter hits while walking a provider payload.
#[derive(Error, Debug)]
pub enum AppError {
    /// Payload is not JSON, or the job object is missing from its envelope.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A single field had an unexpected shape.
    #[error("Field error ({field}): {message}")]
    FieldError { field: String, message: String },

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No adapter is registered for the requested provider.
    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),
}

impl AppError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error should abort the record being built.
    ///
    /// Field errors only cost the one field; everything else means the
    /// payload cannot produce a record at all.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::FieldError { .. })
    }
}
