//! # Folio
//!
//! A content-based catalog recommender.
//!
//! Folio turns catalog records (title, category, authors) into TF-IDF term
//! vectors, precomputes the pairwise cosine similarity of every item, and
//! answers "what is most like this item?" from an immutable model snapshot.
//! Retraining rebuilds the whole model off to the side and swaps it in only
//! when the build succeeded, so queries never see a half-built model.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! folio --catalog books.json --http-port 5000
//! curl 'http://localhost:5000/recommend?isbn=978-0441013593'
//! curl -X POST http://localhost:5000/retrain
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use folio::prelude::*;
//! use std::sync::Arc;
//!
//! let source = Arc::new(StaticSource::new(vec![
//!     CatalogRecord::new("A", "Dune", "Scifi").with_author("HerbertF"),
//!     CatalogRecord::new("B", "Dune Messiah", "Scifi").with_author("HerbertF"),
//!     CatalogRecord::new("C", "Cooking", "Italian").with_author("BlancR"),
//! ]));
//! let manager = ModelManager::new(source, RecommenderConfig::default()).unwrap();
//! manager.retrain().unwrap();
//! assert_eq!(manager.recommend("A").unwrap(), vec!["B", "C"]);
//! ```
//!
//! ## Crate Structure
//!
//! - `folio-core` - Corpus, stop words, TF-IDF vectorizer, similarity matrix, snapshot ranking
//! - `folio-storage` - Model store, catalog sources, retrain coordination
//! - `folio-api` - REST API

// Re-export core types
pub use folio_core::{
    CatalogItem, CatalogRecord, Corpus,
    TfidfVectorizer, Vocabulary, TermVector, StopWords, StopWordsFilter,
    SimilarityMatrix, Snapshot, Neighbor, RecommenderConfig,
    Error, Result,
};

// Re-export storage
pub use folio_storage::{
    ModelManager, ModelStore, SnapshotInfo,
    CatalogSource, JsonFileSource, StaticSource,
};

// Re-export API
pub use folio_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogRecord, RecommenderConfig, StopWords, Snapshot, Neighbor,
        Error, Result,
        ModelManager, ModelStore, SnapshotInfo,
        CatalogSource, JsonFileSource, StaticSource,
        RestApi,
    };
}
