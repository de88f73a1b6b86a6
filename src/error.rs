use std::io;
use std::path::PathBuf;
use semsearch_embed::SemsearchEmbedError;
use thiserror::Error;

/// Result type for semsearch operations
pub type Result<T> = std::result::Result<T, SemsearchError>;

/// Errors that can occur while loading or searching an index
#[derive(Error, Debug)]
pub enum SemsearchError {
    #[error("Invalid parameter: {0}")]
    /// A caller-supplied argument was rejected before any work was done.
    InvalidParameter(String),

    #[error("Index not found: {0}")]
    /// No index with the given name exists in the store.
    IndexNotFound(String),

    #[error("Failed to read file {path}: {source}")]
    /// Error indicating a failure to read from a file.
    FileReadError {
        /// The path to the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error that occurred.
        source: io::Error,
    },

    #[error("Error deserializing data: {0}")]
    /// A stored index or metadata file could not be parsed.
    DeserializationError(String),

    #[error("Index dimension ({expected}) does not match query/data dimension ({found})")]
    /// Error indicating a mismatch between expected and actual embedding dimensions.
    DimensionMismatch {
        /// The expected embedding dimension.
        expected: usize,
        /// The found embedding dimension.
        found: usize,
    },

    #[error("Index integrity error: {0}")]
    /// The vector index and its metadata disagree.
    IndexIntegrity(String),

    #[error("Error generating embedding: {0}")]
    /// Error occurring during the generation of text embeddings.
    EmbeddingError(String),

    #[error("Configuration error: {0}")]
    /// Error related to application configuration.
    ConfigurationError(String),

    #[error("IO error: {0}")]
    /// A generic I/O error, often wrapping `std::io::Error`.
    IOError(#[from] io::Error),

    #[error("Feature not implemented: {0}")]
    /// Error when a requested feature is not yet implemented
    NotImplemented(String),
}

impl From<SemsearchEmbedError> for SemsearchError {
    fn from(err: SemsearchEmbedError) -> Self {
        match err {
            SemsearchEmbedError::DimensionMismatch { expected, actual } => {
                SemsearchError::DimensionMismatch { expected, found: actual }
            }
            other => SemsearchError::EmbeddingError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SemsearchError {
    fn from(err: serde_json::Error) -> Self {
        SemsearchError::DeserializationError(err.to_string())
    }
}
