use crate::constants::{INDEX_FILE_NAME, METADATA_FILE_NAME};
use crate::index::{DistanceMetric, FlatIndex};
use crate::storage::{FileRecord, IndexMetadata};
use ndarray::Array2;
use semsearch_embed::EmbeddingProvider;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes an L2 flat index and its metadata under `base/name/`.
pub fn write_index(
    base: &Path,
    name: &str,
    vectors: &[Vec<f32>],
    files: &[&str],
    model: Option<&str>,
) {
    let dimension = vectors.first().map_or(1, Vec::len);
    let index = FlatIndex::from_vectors(dimension, DistanceMetric::L2, vectors.to_vec()).unwrap();
    let metadata = IndexMetadata {
        files: files.iter().map(|f| FileRecord::new(*f)).collect(),
        embedding_model: model.map(str::to_string),
        ..IndexMetadata::default()
    };

    let dir = base.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(INDEX_FILE_NAME), serde_json::to_string(&index).unwrap()).unwrap();
    fs::write(dir.join(METADATA_FILE_NAME), serde_json::to_string(&metadata).unwrap()).unwrap();
}

/// A manual embedding provider that counts `encode` calls and returns all-ones rows.
#[derive(Debug)]
pub struct RecordingEmbedder {
    name: String,
    dimension: usize,
    calls: AtomicUsize,
}

impl RecordingEmbedder {
    pub fn new(name: &str, dimension: usize) -> Self {
        Self {
            name: name.to_string(),
            dimension,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `encode` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for RecordingEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.name
    }

    fn encode(&self, texts: &[&str]) -> semsearch_embed::Result<Array2<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Array2::from_elem((texts.len(), self.dimension), 1.0))
    }
}
