//! Error types for the semsearch embedding engine.

use thiserror::Error;

/// Result type alias for the embedding engine.
pub type Result<T> = std::result::Result<T, SemsearchEmbedError>;

/// Errors produced while configuring or running an embedding provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemsearchEmbedError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unknown or malformed model identifier
    #[error("Model error: {message}")]
    Model { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Embedding generation errors
    #[error("Embedding generation failed: {message}")]
    EmbeddingGeneration { message: String },
}

impl SemsearchEmbedError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a model error
    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an embedding generation error
    pub fn embedding_generation<S: Into<String>>(message: S) -> Self {
        Self::EmbeddingGeneration {
            message: message.into(),
        }
    }
}
