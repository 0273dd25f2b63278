//! TF-IDF vectorization over a corpus-wide vocabulary.
//!
//! Every call to [`TfidfVectorizer::fit_transform`] derives the vocabulary
//! from scratch: nothing carries over between builds.
//!
//! - tokens: lowercase runs of alphanumerics or `_`, at least two characters
//! - vocabulary: surviving terms sorted lexicographically, index = rank
//! - weight: `count(t, d) * (ln((1 + n) / (1 + df(t))) + 1)`, then L2-normalized

use crate::stopwords::StopWordsFilter;
use crate::vector::TermVector;
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Terms and their idf weights for one build.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f32>,
    lookup: AHashMap<String, u32>,
}

impl Vocabulary {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.lookup.get(term).copied()
    }

    #[inline]
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.index_of(term).map(|i| self.idf[i as usize])
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWordsFilter,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(StopWordsFilter::english())
    }
}

impl TfidfVectorizer {
    #[inline]
    #[must_use]
    pub fn new(stop_words: StopWordsFilter) -> Self {
        Self { stop_words }
    }

    /// Tokenize text: lowercase, split on anything that is not a word
    /// character, drop single characters.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|s| s.chars().nth(1).is_some())
            .map(str::to_string)
            .collect()
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        let mut tokens = Self::tokenize(text);
        tokens.retain(|t| !self.stop_words.is_stop_word(t));
        tokens
    }

    /// Learn the vocabulary from `documents` and return one unit-length
    /// vector per document, in input order.
    pub fn fit_transform<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
    ) -> (Vocabulary, Vec<TermVector>) {
        let n_docs = documents.len();

        // term -> count, per document
        let counts: Vec<BTreeMap<String, u32>> = documents
            .par_iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in self.analyze(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut doc_freq: BTreeMap<&str, u32> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = n_docs as f32;
        let mut terms = Vec::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        let mut lookup = AHashMap::with_capacity(doc_freq.len());
        for (rank, (term, df)) in doc_freq.into_iter().enumerate() {
            terms.push(term.to_string());
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
            lookup.insert(term.to_string(), rank as u32);
        }
        let vocabulary = Vocabulary { terms, idf, lookup };

        let vectors = counts
            .par_iter()
            .map(|tf| {
                let entries = tf
                    .iter()
                    .filter_map(|(term, &count)| {
                        let index = vocabulary.index_of(term)?;
                        Some((index, count as f32 * vocabulary.idf[index as usize]))
                    })
                    .collect();
                let mut vector = TermVector::new(entries);
                vector.normalize();
                vector
            })
            .collect();

        (vocabulary, vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            TfidfVectorizer::tokenize("Dune: Messiah, a_b X 2nd!"),
            vec!["dune", "messiah", "a_b", "2nd"]
        );
    }

    #[test]
    fn test_stop_words_removed_before_counting() {
        let vectorizer = TfidfVectorizer::default();
        let (vocab, _) = vectorizer.fit_transform(&["The Lord of the Rings"]);
        assert_eq!(vocab.terms(), &["lord".to_string(), "rings".to_string()]);
    }

    #[test]
    fn test_vocabulary_sorted_and_deterministic() {
        let docs = ["zeta alpha", "mid alpha", "beta"];
        let vectorizer = TfidfVectorizer::default();
        let (v1, vecs1) = vectorizer.fit_transform(&docs);
        let (v2, vecs2) = vectorizer.fit_transform(&docs);
        assert_eq!(v1.terms(), &["alpha", "beta", "mid", "zeta"]);
        assert_eq!(v1.terms(), v2.terms());
        assert_eq!(vecs1, vecs2);
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = TfidfVectorizer::default();
        let (vocab, _) = vectorizer.fit_transform(&["shared rare", "shared"]);
        assert!((vocab.idf("shared").unwrap() - 1.0).abs() < 1e-6);
        let expected = (3.0f32 / 2.0).ln() + 1.0;
        assert!((vocab.idf("rare").unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectorizer = TfidfVectorizer::default();
        let (_, vectors) = vectorizer.fit_transform(&["dune dune scifi", "cooking italian"]);
        for v in &vectors {
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_all_stop_word_document_is_zero_vector() {
        let vectorizer = TfidfVectorizer::default();
        let (_, vectors) = vectorizer.fit_transform(&["the and of", "dune"]);
        assert!(vectors[0].is_empty());
        assert_eq!(vectors[1].nnz(), 1);
    }

    #[test]
    fn test_no_stop_words() {
        let vectorizer = TfidfVectorizer::new(StopWordsFilter::none());
        let (vocab, _) = vectorizer.fit_transform(&["the rings"]);
        assert_eq!(vocab.len(), 2);
    }
}
