use crate::constants::SENTINEL_ID;
use crate::error::{Result, SemsearchError};
use crate::index::{DistanceMetric, VectorIndex};
use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Exact index: every query is compared against every stored vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatIndex {
    dimension: usize,
    #[serde(default)]
    metric: DistanceMetric,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Creates an empty index.
    pub fn new(dimension: usize, metric: DistanceMetric) -> Self {
        Self {
            dimension,
            metric,
            vectors: Vec::new(),
        }
    }

    /// Wraps already-computed vectors. Id `i` refers to `vectors[i]`.
    pub fn from_vectors(dimension: usize, metric: DistanceMetric, vectors: Vec<Vec<f32>>) -> Result<Self> {
        let index = Self {
            dimension,
            metric,
            vectors,
        };
        index.validate()?;
        Ok(index)
    }

    /// Checks that the dimension is positive and every vector has that width.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(SemsearchError::InvalidParameter(
                "index dimension must be greater than 0".to_string(),
            ));
        }
        if let Some(bad) = self.vectors.iter().find(|v| v.len() != self.dimension) {
            return Err(SemsearchError::DimensionMismatch {
                expected: self.dimension,
                found: bad.len(),
            });
        }
        Ok(())
    }

    /// The metric scores are computed with.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl VectorIndex for FlatIndex {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn search(&self, queries: &Array2<f32>, k: usize) -> Result<(Array2<f32>, Array2<i64>)> {
        if queries.ncols() != self.dimension {
            return Err(SemsearchError::DimensionMismatch {
                expected: self.dimension,
                found: queries.ncols(),
            });
        }

        let mut scores = Array2::from_elem((queries.nrows(), k), f32::INFINITY);
        let mut ids = Array2::from_elem((queries.nrows(), k), SENTINEL_ID);

        for (row, query) in queries.rows().into_iter().enumerate() {
            let query = query.to_vec();
            let mut candidates: Vec<(f32, usize)> = self
                .vectors
                .iter()
                .enumerate()
                .map(|(id, v)| (self.metric.distance(&query, v), id))
                .collect();
            candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            for (slot, (score, id)) in candidates.into_iter().take(k).enumerate() {
                scores[[row, slot]] = score;
                ids[[row, slot]] = id as i64;
            }
        }

        debug!(
            "Flat {} search over {} vectors for {} queries, k={}",
            self.metric,
            self.vectors.len(),
            queries.nrows(),
            k
        );
        Ok((scores, ids))
    }
}
