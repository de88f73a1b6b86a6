//! Factory for creating embedding providers based on configuration.

use crate::config::EmbeddingConfig;
use crate::error::Result;
use crate::provider::{EmbeddingProvider, HashingEmbeddingProvider};
use std::sync::Arc;

/// Create an embedding provider based on the configuration.
pub fn create_embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    log::debug!("Creating embedding provider for model: {}", config.model_name);
    let spec = config.validate()?;
    let provider = HashingEmbeddingProvider::new(spec).with_normalize(config.normalize);
    Ok(Arc::new(provider))
}
