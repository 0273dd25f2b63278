use serde::{Deserialize, Serialize};

/// Sparse term vector: `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TermVector {
    entries: Vec<(u32, f32)>,
}

impl TermVector {
    /// Entries are sorted by term index; duplicate indices are not merged.
    #[inline]
    #[must_use]
    pub fn new(mut entries: Vec<(u32, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(term, _)| term);
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[(u32, f32)] {
        &self.entries
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Normalize the vector to unit length; the zero vector stays zero.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for (_, w) in &mut self.entries {
                *w *= inv_norm;
            }
        }
    }

    /// Dot product over shared terms.
    ///
    /// Products are accumulated in ascending term order, so `a.dot(b)` and
    /// `b.dot(a)` are bit-identical.
    pub fn dot(&self, other: &TermVector) -> f32 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
