//! Configuration types for the embedding engine.

use crate::error::{Result, SemsearchEmbedError};
use crate::model::ModelSpec;
use crate::DEFAULT_MODEL_NAME;
use serde::{Deserialize, Serialize};

/// Main configuration for the embedding engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Model identifier, e.g. `feature-hash` or `feature-hash-256`
    pub model_name: String,

    /// Expected embedding dimension (for validation)
    pub expected_dimension: Option<usize>,

    /// Scale every embedding to unit length
    pub normalize: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            expected_dimension: None,
            normalize: true,
        }
    }
}

impl EmbeddingConfig {
    /// Create a configuration for the named model.
    pub fn new<S: Into<String>>(model_name: S) -> Self {
        Self {
            model_name: model_name.into(),
            ..Self::default()
        }
    }

    /// Set the expected embedding dimension.
    pub fn with_expected_dimension(mut self, dimension: usize) -> Self {
        self.expected_dimension = Some(dimension);
        self
    }

    /// Enable or disable normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Validate the configuration, returning the parsed model on success.
    pub fn validate(&self) -> Result<ModelSpec> {
        let spec = ModelSpec::parse(&self.model_name)?;

        if let Some(expected) = self.expected_dimension {
            if expected == 0 {
                return Err(SemsearchEmbedError::configuration(
                    "expected_dimension must be greater than 0",
                ));
            }
            if expected != spec.dimension() {
                return Err(SemsearchEmbedError::dimension_mismatch(expected, spec.dimension()));
            }
        }

        Ok(spec)
    }
}
