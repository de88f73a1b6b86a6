//! Vector index abstraction used by the searcher.

use crate::error::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod flat;

pub use flat::FlatIndex;

/// A loaded nearest-neighbor index over fixed-dimension vectors.
///
/// Vectors are addressed by dense ids `0..len()`, in insertion order.
#[cfg_attr(test, mockall::automock)]
pub trait VectorIndex: Send + Sync {
    /// Number of vectors stored in the index.
    fn len(&self) -> usize;

    /// Whether the index holds no vectors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of every stored vector.
    fn dimension(&self) -> usize;

    /// Finds the `k` nearest neighbors of every row in `queries`.
    ///
    /// Returns `(scores, ids)`, both shaped `(queries.nrows(), k)`. Each row is
    /// ordered best match first; lower scores are closer. Slots without a
    /// valid neighbor hold a negative id.
    fn search(&self, queries: &Array2<f32>, k: usize) -> Result<(Array2<f32>, Array2<i64>)>;
}

/// Distance metrics supported by [`FlatIndex`]. Both are "lower is closer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Squared Euclidean distance
    #[default]
    L2,
    /// One minus cosine similarity
    Cosine,
}

impl DistanceMetric {
    /// Distance between two vectors of equal length.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            DistanceMetric::L2 => a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum(),
            DistanceMetric::Cosine => {
                let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
                let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm_a == 0.0 || norm_b == 0.0 {
                    return 1.0;
                }
                1.0 - dot / (norm_a * norm_b)
            }
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::L2 => write!(f, "l2"),
            DistanceMetric::Cosine => write!(f, "cosine"),
        }
    }
}
