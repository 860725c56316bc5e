use candle_core::{Device, Tensor};
use tracing::debug;

use super::error::ScoringError;

/// Cosine similarity of two equal-length vectors.
///
/// A zero-norm operand yields `0.0` rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_with_norms(a, l2_norm(a), b, l2_norm(b))
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

fn cosine_with_norms(a: &[f32], a_norm: f32, b: &[f32], b_norm: f32) -> f32 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (a_norm * b_norm)
}

fn unit_or_zero(v: &[f32]) -> impl Iterator<Item = f32> + '_ {
    let norm = l2_norm(v);
    let scale = if norm == 0.0 { 0.0 } else { norm.recip() };
    v.iter().map(move |x| x * scale)
}

fn mean(values: &[f32]) -> f32 {
    let sum: f64 = values.iter().map(|v| f64::from(*v)).sum();
    (sum / values.len() as f64) as f32
}

/// Row-major matrix of anchor embeddings with cached row norms.
///
/// `unit` holds the same rows scaled to unit length (zero rows stay zero) and feeds the
/// batch matmul.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorMatrix {
    dim: usize,
    data: Vec<f32>,
    norms: Vec<f32>,
    unit: Vec<f32>,
}

impl AnchorMatrix {
    /// Builds a matrix from equal-length rows (at least one).
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ScoringError> {
        let dim = rows.first().ok_or(ScoringError::EmptyMatrix)?.len();
        if dim == 0 {
            return Err(ScoringError::ZeroDimension);
        }

        let mut data = Vec::with_capacity(rows.len() * dim);
        let mut norms = Vec::with_capacity(rows.len());
        let mut unit = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            if row.len() != dim {
                return Err(ScoringError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
            norms.push(l2_norm(&row));
            unit.extend(unit_or_zero(&row));
            data.extend(row);
        }

        Ok(Self {
            dim,
            data,
            norms,
            unit,
        })
    }

    pub fn rows(&self) -> usize {
        self.norms.len()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns row `index`, if present.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        (index < self.rows()).then(|| &self.data[index * self.dim..(index + 1) * self.dim])
    }

    fn check_dim(&self, query: &[f32]) -> Result<(), ScoringError> {
        if query.len() != self.dim {
            return Err(ScoringError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }
        Ok(())
    }

    /// Cosine similarity of `query` against every row, in row order.
    pub fn similarities(&self, query: &[f32]) -> Result<Vec<f32>, ScoringError> {
        self.check_dim(query)?;
        let query_norm = l2_norm(query);

        Ok(self
            .data
            .chunks_exact(self.dim)
            .zip(&self.norms)
            .map(|(row, row_norm)| cosine_with_norms(query, query_norm, row, *row_norm))
            .collect())
    }

    /// Mean cosine similarity of `query` over all rows: the tier score.
    pub fn mean_similarity(&self, query: &[f32]) -> Result<f32, ScoringError> {
        Ok(mean(&self.similarities(query)?))
    }

    /// `N x M` similarities for `N` queries against the `M` rows.
    ///
    /// Computed as one `[N, D] x [D, M]` matmul over unit-length rows. Agrees with
    /// [`similarities`](Self::similarities) per query within float rounding.
    pub fn similarity_matrix(&self, queries: &[Vec<f32>]) -> Result<Vec<Vec<f32>>, ScoringError> {
        if queries.is_empty() {
            return Ok(vec![]);
        }
        for query in queries {
            self.check_dim(query)?;
        }

        debug!(
            queries = queries.len(),
            anchors = self.rows(),
            dim = self.dim,
            "Computing similarity matrix"
        );

        let device = Device::Cpu;
        let stacked: Vec<f32> = queries.iter().flat_map(|q| unit_or_zero(q)).collect();
        let queries = Tensor::from_vec(stacked, (queries.len(), self.dim), &device)?;
        let anchors = Tensor::from_slice(&self.unit, (self.rows(), self.dim), &device)?
            .t()?
            .contiguous()?;

        Ok(queries.matmul(&anchors)?.to_vec2::<f32>()?)
    }

    /// Row means of [`similarity_matrix`](Self::similarity_matrix): one score per query.
    pub fn mean_similarities(&self, queries: &[Vec<f32>]) -> Result<Vec<f32>, ScoringError> {
        Ok(self
            .similarity_matrix(queries)?
            .iter()
            .map(|row| mean(row))
            .collect())
    }
}
