use crate::corpus::{CatalogRecord, Corpus};
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::TfidfVectorizer;
use crate::{Error, RecommenderConfig, Result};
use serde::Serialize;

/// One ranked neighbor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: String,
    pub score: f32,
}

/// An immutable trained model: corpus, identifier index and similarity
/// matrix, all from the same build.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    corpus: Corpus,
    matrix: SimilarityMatrix,
    vocabulary_size: usize,
}

impl Snapshot {
    /// The untrained model; every lookup reports `NotFound`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Runs the whole pipeline (corpus, vectorizer, similarity) on `records`.
    ///
    /// Fails with `EmptyCorpus` when there is nothing to train on and with
    /// `DuplicateItem` when identifiers repeat.
    pub fn build(records: Vec<CatalogRecord>, config: &RecommenderConfig) -> Result<Self> {
        let corpus = Corpus::build(records)?;
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let vectorizer = TfidfVectorizer::new(config.stop_words.filter());
        let (vocabulary, vectors) = vectorizer.fit_transform(&corpus.contents());
        let matrix = SimilarityMatrix::compute(&vectors);
        debug_assert_eq!(matrix.dim(), corpus.len());

        Ok(Self {
            corpus,
            matrix,
            vocabulary_size: vocabulary.len(),
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.corpus.position(id).is_some()
    }

    /// Nearest neighbors of `id`, best first, at most `limit` of them.
    ///
    /// Ties on score go to the lower row position. The item itself is
    /// excluded by position.
    pub fn neighbors(&self, id: &str, limit: usize) -> Result<Vec<Neighbor>> {
        let position = self
            .corpus
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let row = self.matrix.row(position);

        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != position)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);

        Ok(ranked
            .into_iter()
            .filter_map(|(j, score)| {
                self.corpus.get(j).map(|item| Neighbor {
                    id: item.id.clone(),
                    score,
                })
            })
            .collect())
    }

    /// Identifiers of the nearest neighbors of `id`.
    pub fn recommend(&self, id: &str, limit: usize) -> Result<Vec<String>> {
        Ok(self
            .neighbors(id, limit)?
            .into_iter()
            .map(|n| n.id)
            .collect())
    }
}
