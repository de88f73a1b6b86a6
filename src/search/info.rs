use chrono::{DateTime, Utc};
use serde::Serialize;

/// Descriptive snapshot of a loaded index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexInfo {
    /// Name the index was loaded under.
    pub index_name: String,
    /// Number of vectors in the index.
    pub num_vectors: usize,
    /// Width of each vector.
    pub dimension: usize,
    /// Number of file records in the metadata.
    pub num_files: usize,
    /// Build time recorded in the metadata.
    pub created_at: Option<DateTime<Utc>>,
    /// Indexed root recorded in the metadata.
    pub indexed_path: Option<String>,
    /// Embedding model recorded in the metadata.
    pub embedding_model: Option<String>,
}
