//! # Folio Core
//!
//! Core library for the Folio content-based recommender.
//!
//! This crate provides the model pipeline:
//!
//! - [`Corpus`] - Typed catalog items with an identifier index
//! - [`TfidfVectorizer`] - Stop-word filtered TF-IDF term vectors
//! - [`SimilarityMatrix`] - Dense pairwise cosine similarity
//! - [`Snapshot`] - An immutable trained model with neighbor ranking
//!
//! ## Example
//!
//! ```rust
//! use folio_core::{CatalogRecord, RecommenderConfig, Snapshot};
//!
//! let records = vec![
//!     CatalogRecord::new("A", "Dune", "Scifi").with_author("HerbertF"),
//!     CatalogRecord::new("B", "Dune Messiah", "Scifi").with_author("HerbertF"),
//!     CatalogRecord::new("C", "Cooking", "Italian").with_author("BlancR"),
//! ];
//! let snapshot = Snapshot::build(records, &RecommenderConfig::default()).unwrap();
//! assert_eq!(snapshot.recommend("A", 5).unwrap()[0], "B");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod similarity;
pub mod snapshot;
pub mod stopwords;
pub mod vector;
pub mod vectorizer;

pub use config::{RecommenderConfig, StopWords};
pub use corpus::{CatalogItem, CatalogRecord, Corpus};
pub use error::{Error, Result};
pub use similarity::{SimilarityMatrix, MAX_SIMILARITY};
pub use snapshot::{Neighbor, Snapshot};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use vector::TermVector;
pub use vectorizer::{TfidfVectorizer, Vocabulary};
