//! Deterministic feature-hashing embedding provider.

use crate::error::{Result, SemsearchEmbedError};
use crate::model::ModelSpec;
use crate::provider::EmbeddingProvider;
use ndarray::Array2;

const NGRAM_SIZE: usize = 3;
const NGRAM_WEIGHT: f32 = 0.5;
const POSITION_WEIGHT: f32 = 0.3;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Embeds text by hashing word tokens and character trigrams into a fixed
/// number of buckets. Hashes are seeded with the model identifier.
#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    spec: ModelSpec,
    seed: u64,
    normalize: bool,
}

impl HashingEmbeddingProvider {
    /// Creates a provider for the given model.
    pub fn new(spec: ModelSpec) -> Self {
        let seed = fnv1a(FNV_OFFSET, spec.name().as_bytes());
        Self {
            spec,
            seed,
            normalize: true,
        }
    }

    /// Enable or disable unit-length normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn generate_ngrams(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        (0..chars.len().saturating_sub(NGRAM_SIZE - 1))
            .map(|i| chars[i..i + NGRAM_SIZE].iter().collect())
            .collect()
    }

    /// Earlier tokens weigh slightly more than later ones.
    fn calculate_position_weight(position: usize, total: usize) -> f32 {
        let normalized_pos = position as f32 / total as f32;
        1.0 + (POSITION_WEIGHT * (1.0 - normalized_pos))
    }

    fn accumulate(&self, embedding: &mut [f32], feature: &str, weight: f32) {
        let hash = fnv1a(self.seed, feature.as_bytes());
        let idx = (hash % embedding.len() as u64) as usize;
        // Top bit picks the sign so collisions cancel out on average.
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        embedding[idx] += sign * weight;
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0f32; self.spec.dimension()];

        let tokens = Self::tokenize(text);
        let total_tokens = tokens.len();
        for (pos, token) in tokens.iter().enumerate() {
            let weight = Self::calculate_position_weight(pos, total_tokens);
            self.accumulate(&mut embedding, token, weight);
        }

        for ngram in Self::generate_ngrams(text) {
            self.accumulate(&mut embedding, &ngram, NGRAM_WEIGHT);
        }

        if self.normalize {
            let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 0.0 {
                for x in &mut embedding {
                    *x /= norm;
                }
            }
        }

        embedding
    }
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self::new(ModelSpec::default())
    }
}

impl EmbeddingProvider for HashingEmbeddingProvider {
    fn dimension(&self) -> usize {
        self.spec.dimension()
    }

    fn model_name(&self) -> &str {
        self.spec.name()
    }

    fn encode(&self, texts: &[&str]) -> Result<Array2<f32>> {
        let dimension = self.spec.dimension();
        let mut flat = Vec::with_capacity(texts.len() * dimension);
        for text in texts {
            flat.extend(self.embed_one(text));
        }
        Array2::from_shape_vec((texts.len(), dimension), flat)
            .map_err(|e| SemsearchEmbedError::embedding_generation(e.to_string()))
    }
}

fn fnv1a(seed: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(seed, |hash, &b| (hash ^ b as u64).wrapping_mul(FNV_PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tests::test_provider_basics;

    #[test]
    fn test_hashing_provider() {
        let provider = HashingEmbeddingProvider::default();
        test_provider_basics(&provider);
    }

    #[test]
    fn test_deterministic_embeddings() {
        let provider = HashingEmbeddingProvider::default();
        let first = provider.embed("load the index").unwrap();
        let second = provider.embed("load the index").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_model_name_changes_vector_space() {
        let a = HashingEmbeddingProvider::new(ModelSpec::parse("feature-hash-64").unwrap());
        let b = HashingEmbeddingProvider::new(ModelSpec::parse("feature-hash-064").unwrap());
        assert_eq!(a.dimension(), b.dimension());
        assert_ne!(a.embed("search").unwrap(), b.embed("search").unwrap());
    }

    #[test]
    fn test_empty_batch_and_empty_text() {
        let provider = HashingEmbeddingProvider::default();
        let matrix = provider.encode(&[]).unwrap();
        assert_eq!(matrix.dim(), (0, provider.dimension()));

        let zero = provider.embed("").unwrap();
        assert!(zero.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_ngram_generation() {
        let ngrams = HashingEmbeddingProvider::generate_ngrams("Hello");
        assert_eq!(ngrams, vec!["hel", "ell", "llo"]);
        assert!(HashingEmbeddingProvider::generate_ngrams("hi").is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = HashingEmbeddingProvider::tokenize("fn load_index(name: &str)");
        assert_eq!(tokens, vec!["fn", "load_index", "name", "str"]);
    }

    #[test]
    fn test_position_weighting() {
        let weight_start = HashingEmbeddingProvider::calculate_position_weight(0, 10);
        let weight_end = HashingEmbeddingProvider::calculate_position_weight(9, 10);
        assert!(weight_start > weight_end);
    }

    #[test]
    fn test_unnormalized_output() {
        let provider = HashingEmbeddingProvider::default().with_normalize(false);
        let embedding = provider.embed("alpha beta gamma").unwrap();
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!(norm > 1.0);
    }
}
