//! Model identifiers understood by the built-in providers.

use crate::error::{Result, SemsearchEmbedError};
use crate::{DEFAULT_EMBEDDING_DIMENSION, DEFAULT_MODEL_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest dimension accepted in a `feature-hash-<dim>` identifier.
pub const MAX_EMBEDDING_DIMENSION: usize = 4096;

/// A parsed model identifier.
///
/// Identifiers have the form `feature-hash` or `feature-hash-<dim>`. The
/// full identifier string is kept because it seeds the provider: two
/// identifiers never share a vector space, even at the same dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    name: String,
    dimension: usize,
}

impl ModelSpec {
    /// Parse a model identifier.
    pub fn parse(identifier: &str) -> Result<Self> {
        let name = identifier.trim();
        if name.is_empty() {
            return Err(SemsearchEmbedError::model("model identifier is empty"));
        }

        if name == DEFAULT_MODEL_NAME {
            return Ok(Self {
                name: name.to_string(),
                dimension: DEFAULT_EMBEDDING_DIMENSION,
            });
        }

        let dim_str = name
            .strip_prefix(DEFAULT_MODEL_NAME)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| SemsearchEmbedError::model(format!("unknown model '{name}'")))?;

        let dimension: usize = dim_str.parse().map_err(|_| {
            SemsearchEmbedError::model(format!("invalid dimension '{dim_str}' in model '{name}'"))
        })?;

        if dimension == 0 || dimension > MAX_EMBEDDING_DIMENSION {
            return Err(SemsearchEmbedError::model(format!(
                "dimension {dimension} in model '{name}' is outside 1..={MAX_EMBEDDING_DIMENSION}"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            dimension,
        })
    }

    /// The identifier as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The embedding dimension this model produces.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL_NAME.to_string(),
            dimension: DEFAULT_EMBEDDING_DIMENSION,
        }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
