use crate::storage::FileRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single ranked hit for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Path relative to the indexed root, as stored at index time.
    pub file_path: String,
    /// Resolved path at index time; empty when unavailable.
    pub absolute_path: String,
    /// Raw distance reported by the index (lower is more similar).
    pub score: f32,
    /// 1-based position in the result list.
    pub rank: usize,
    /// File size in bytes at index time; 0 when unknown.
    pub size: u64,
}

impl SearchResult {
    pub(crate) fn from_record(record: &FileRecord, score: f32, rank: usize) -> Self {
        Self {
            file_path: record.file_path.clone(),
            absolute_path: record.absolute_path.clone(),
            score,
            rank,
            size: record.size,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (score: {:.4})", self.rank, self.file_path, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let result = SearchResult {
            file_path: "src/main.rs".to_string(),
            absolute_path: String::new(),
            score: 0.123456,
            rank: 2,
            size: 0,
        };
        assert_eq!(result.to_string(), "[2] src/main.rs (score: 0.1235)");
    }

    #[test]
    fn test_from_record_copies_fields() {
        let record = FileRecord {
            file_path: "a.py".to_string(),
            absolute_path: "/repo/a.py".to_string(),
            size: 42,
        };
        let result = SearchResult::from_record(&record, 0.5, 1);
        assert_eq!(result.absolute_path, "/repo/a.py");
        assert_eq!(result.size, 42);
        assert_eq!(result.rank, 1);
    }
}
