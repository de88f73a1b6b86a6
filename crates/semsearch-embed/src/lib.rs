//! # semsearch embedding engine
//!
//! Embedding providers used by `semsearch` to place queries in the same
//! vector space an index was built in.
//!
//! ## Quick Start
//!
//! ```rust
//! use semsearch_embed::{create_embedding_provider, EmbeddingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = create_embedding_provider(&EmbeddingConfig::default())?;
//! let matrix = provider.encode(&["parse a config file"])?;
//! assert_eq!(matrix.dim(), (1, provider.dimension()));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod model;
pub mod provider;

pub use config::EmbeddingConfig;
pub use error::{Result, SemsearchEmbedError};
pub use model::ModelSpec;
pub use provider::{create_embedding_provider, EmbeddingProvider, HashingEmbeddingProvider};

/// Current version of the semsearch-embed crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier of the model used when neither the caller nor an index names one.
pub const DEFAULT_MODEL_NAME: &str = "feature-hash";

/// Embedding dimension of the default model.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;
