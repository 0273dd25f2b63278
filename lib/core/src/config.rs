use crate::stopwords::StopWordsFilter;
use crate::{Error, Result};

/// Which stop words the vectorizer removes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopWords {
    #[default]
    English,
    None,
    Custom(Vec<String>),
}

impl StopWords {
    #[must_use]
    pub fn filter(&self) -> StopWordsFilter {
        match self {
            StopWords::English => StopWordsFilter::english(),
            StopWords::None => StopWordsFilter::none(),
            StopWords::Custom(words) => StopWordsFilter::new(words),
        }
    }
}

/// Configuration for model builds and queries
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Number of neighbors returned by `recommend`.
    pub top_k: usize,
    pub stop_words: StopWords,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            stop_words: StopWords::English,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        Ok(())
    }
}
