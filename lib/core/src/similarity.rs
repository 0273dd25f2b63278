use crate::vector::TermVector;
use rayon::prelude::*;

/// Similarity every item has with itself.
pub const MAX_SIMILARITY: f32 = 1.0;

/// Dense, symmetric n x n matrix of cosine similarities, stored row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Pairwise dot products of unit-length vectors.
    ///
    /// The diagonal is pinned to [`MAX_SIMILARITY`] (also for zero vectors) and
    /// off-diagonal entries are clamped into `[0, MAX_SIMILARITY]`.
    pub fn compute(vectors: &[TermVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];

        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        MAX_SIMILARITY
                    } else {
                        vectors[i].dot(&vectors[j]).clamp(0.0, MAX_SIMILARITY)
                    };
                }
            });
        }

        Self { n, data }
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
