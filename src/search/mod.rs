//! Query pipeline: embed the query, search the index, map ids back to files.

pub mod info;
pub mod output;
pub mod result;


pub use info::IndexInfo;
pub use output::{print_results, results_to_json, write_results, PreviewStatus};
pub use result::SearchResult;

use crate::config::{AppConfig, DEFAULT_EMBEDDING_MODEL};
use crate::constants::DEFAULT_TOP_K;
use crate::error::{Result, SemsearchError};
use crate::index::VectorIndex;
use crate::storage::{FileIndexStorage, IndexMetadata, IndexStore};
use log::{debug, info};
use semsearch_embed::{create_embedding_provider, EmbeddingConfig, EmbeddingProvider};
use std::sync::Arc;

/// Semantic search over one loaded index.
///
/// The index and its metadata are loaded once at construction and never
/// modified afterwards; every [`Searcher::search`] call is independent.
pub struct Searcher {
    index_name: String,
    index: Box<dyn VectorIndex>,
    metadata: IndexMetadata,
    embedding_model: Arc<dyn EmbeddingProvider>,
    default_top_k: usize,
}

impl Searcher {
    /// Loads `index_name` and binds an embedding model to it.
    ///
    /// An explicit `embedding_model` is trusted to match the index's vector
    /// space. Without one, the model recorded in the index metadata is used,
    /// or [`DEFAULT_EMBEDDING_MODEL`] if none is recorded. Without a
    /// `storage`, indexes are read from the default data directory.
    pub fn new(
        index_name: &str,
        embedding_model: Option<Arc<dyn EmbeddingProvider>>,
        storage: Option<&dyn IndexStore>,
    ) -> Result<Self> {
        match storage {
            Some(storage) => Self::load(index_name, embedding_model, storage, DEFAULT_TOP_K),
            None => {
                let storage = FileIndexStorage::from_config(&AppConfig::default())?;
                Self::load(index_name, embedding_model, &storage, DEFAULT_TOP_K)
            }
        }
    }

    /// Loads `index_name` from the store described by `config`.
    ///
    /// `config.embedding_model`, when set, takes precedence over the index metadata.
    pub fn from_config(index_name: &str, config: &AppConfig) -> Result<Self> {
        let storage = FileIndexStorage::from_config(config)?;
        let embedding_model = match &config.embedding_model {
            Some(name) => Some(create_embedding_provider(&EmbeddingConfig::new(name.as_str()))?),
            None => None,
        };
        Self::load(index_name, embedding_model, &storage, config.default_top_k)
    }

    fn load(
        index_name: &str,
        embedding_model: Option<Arc<dyn EmbeddingProvider>>,
        storage: &dyn IndexStore,
        default_top_k: usize,
    ) -> Result<Self> {
        let (index, metadata) = storage.load_index(index_name)?;

        let embedding_model = match embedding_model {
            Some(model) => model,
            None => {
                let model_name = metadata
                    .embedding_model
                    .as_deref()
                    .unwrap_or(DEFAULT_EMBEDDING_MODEL);
                debug!("Using embedding model '{model_name}' for index '{index_name}'");
                create_embedding_provider(&EmbeddingConfig::new(model_name))?
            }
        };

        info!("Loaded index '{}' with {} vectors", index_name, index.len());

        Ok(Self {
            index_name: index_name.to_string(),
            index,
            metadata,
            embedding_model,
            default_top_k,
        })
    }

    /// Returns up to `top_k` files most similar to `query`, best first.
    ///
    /// Ranks are 1-based and contiguous. The order is exactly the order the
    /// index reports. Neighbor slots with a sentinel id, or an id that has no
    /// metadata record, are dropped without consuming a rank, so fewer than
    /// `top_k` results may come back.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(SemsearchError::InvalidParameter(
                "Search query cannot be empty".to_string(),
            ));
        }
        if top_k == 0 {
            return Err(SemsearchError::InvalidParameter(
                "top_k must be greater than 0".to_string(),
            ));
        }

        let total = self.index.len();
        if total == 0 {
            debug!("Index '{}' is empty, returning no results", self.index_name);
            return Ok(Vec::new());
        }

        let query_embedding = self.embedding_model.encode(&[query])?;
        if query_embedding.nrows() != 1 {
            return Err(SemsearchError::EmbeddingError(format!(
                "expected 1 query embedding, got {}",
                query_embedding.nrows()
            )));
        }

        let k = top_k.min(total);
        let (scores, ids) = self.index.search(&query_embedding, k)?;

        let (Some(scores), Some(ids)) = (scores.outer_iter().next(), ids.outer_iter().next()) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::with_capacity(k);
        for (&score, &id) in scores.iter().zip(ids.iter()) {
            let Some(record) = self.metadata.file(id) else {
                continue;
            };
            results.push(SearchResult::from_record(record, score, results.len() + 1));
        }

        debug!(
            "Query returned {} of {} requested results from index '{}'",
            results.len(),
            top_k,
            self.index_name
        );
        Ok(results)
    }

    /// [`Searcher::search`] with the configured default result count.
    pub fn search_default(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search(query, self.default_top_k)
    }

    /// Describes the loaded index.
    pub fn index_info(&self) -> IndexInfo {
        IndexInfo {
            index_name: self.index_name.clone(),
            num_vectors: self.index.len(),
            dimension: self.index.dimension(),
            num_files: self.metadata.files.len(),
            created_at: self.metadata.created_at,
            indexed_path: self.metadata.indexed_path.clone(),
            embedding_model: self.metadata.embedding_model.clone(),
        }
    }

    /// Name the index was loaded under.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Number of vectors in the loaded index.
    pub fn num_vectors(&self) -> usize {
        self.index.len()
    }

    /// Metadata loaded alongside the index.
    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    /// Embedding model queries are encoded with.
    pub fn embedding_model(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedding_model
    }
}
