use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed file. Its position in [`IndexMetadata::files`] is its vector id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the indexed root, as recorded at build time.
    pub file_path: String,
    /// Resolved path at build time; empty when unknown.
    #[serde(default)]
    pub absolute_path: String,
    /// File size in bytes at build time; 0 when unknown.
    #[serde(default)]
    pub size: u64,
}

impl FileRecord {
    /// Record with only a relative path.
    pub fn new<S: Into<String>>(file_path: S) -> Self {
        Self {
            file_path: file_path.into(),
            absolute_path: String::new(),
            size: 0,
        }
    }
}

/// Sidecar describing what was indexed, in vector-id order, and with which model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Per-file records aligned with vector ids.
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Identifier of the embedding model that produced the vectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    /// When the index was built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Root directory that was indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_path: Option<String>,
}

impl IndexMetadata {
    /// Record for vector `id`, or `None` for sentinel and out-of-range ids.
    pub fn file(&self, id: i64) -> Option<&FileRecord> {
        usize::try_from(id).ok().and_then(|i| self.files.get(i))
    }
}
