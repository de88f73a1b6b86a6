//! # semsearch
//!
//! Semantic search over a prebuilt vector index of files.
//!
//! An index is a directory holding a vector index and a metadata sidecar that
//! maps every vector id to the file it was computed from. A [`Searcher`] loads
//! both once, embeds each query with the model the index was built with, and
//! returns the nearest files in index order.
//!
//! ```no_run
//! use semsearch::{load_config, print_results, Searcher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let searcher = Searcher::from_config("my-project", &config)?;
//! let results = searcher.search("where is the config parsed", 5)?;
//! print_results(&results, false)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod index;
pub mod search;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use config::{get_index_base_path, load_config, AppConfig, IntegrityCheck, DEFAULT_EMBEDDING_MODEL};
pub use error::{Result, SemsearchError};
pub use index::{DistanceMetric, FlatIndex, VectorIndex};
pub use search::{
    print_results, results_to_json, write_results, IndexInfo, PreviewStatus, SearchResult, Searcher,
};
pub use storage::{check_integrity, FileIndexStorage, FileRecord, IndexMetadata, IndexStore};

pub use semsearch_embed::{
    create_embedding_provider, EmbeddingConfig, EmbeddingProvider, HashingEmbeddingProvider,
    SemsearchEmbedError,
};
