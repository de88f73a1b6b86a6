//! Embedding provider implementations and traits.

use crate::error::{Result, SemsearchEmbedError};
use ndarray::Array2;
use std::fmt::Debug;

/// A trait for embedding providers, defining a common interface for generating embeddings.
/// Implementations must be deterministic for a given model identifier, since queries
/// have to land in the vector space the index was built with.
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Get the embedding dimension of the model.
    fn dimension(&self) -> usize;

    /// Get the identifier of the model.
    fn model_name(&self) -> &str;

    /// Embed a batch of texts into a `(texts.len(), dimension)` matrix.
    fn encode(&self, texts: &[&str]) -> Result<Array2<f32>>;

    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let matrix = self.encode(&[text])?;
        if matrix.nrows() != 1 {
            return Err(SemsearchEmbedError::embedding_generation(format!(
                "expected 1 embedding, provider returned {}",
                matrix.nrows()
            )));
        }
        Ok(matrix.row(0).to_vec())
    }
}

pub mod factory;
pub mod hashing;

pub use factory::create_embedding_provider;
pub use hashing::HashingEmbeddingProvider;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // Shared checks every provider implementation should pass.
    pub fn test_provider_basics<P: EmbeddingProvider>(provider: &P) {
        let embedding = provider.embed("fn main() { println!(\"Hello, world!\"); }").unwrap();
        assert_eq!(embedding.len(), provider.dimension());

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 0.01, "Embedding should be normalized");

        let texts = ["fn main() {}", "struct Point { x: i32, y: i32 }"];
        let matrix = provider.encode(&texts).unwrap();
        assert_eq!(matrix.dim(), (2, provider.dimension()));
        assert_ne!(matrix.row(0), matrix.row(1));
    }

    #[test]
    fn test_embedding_provider_trait_object() {
        let provider: Box<dyn EmbeddingProvider> = Box::new(HashingEmbeddingProvider::default());
        assert_eq!(provider.dimension(), crate::DEFAULT_EMBEDDING_DIMENSION);
    }
}
