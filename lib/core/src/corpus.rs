use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A raw catalog row as delivered by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl CatalogRecord {
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            authors: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }
}

/// A normalized catalog item with its derived content string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Author names joined by single spaces, empty when there are none.
    pub authors: String,
    content: String,
}

impl CatalogItem {
    fn from_record(record: CatalogRecord) -> Self {
        let authors = record.authors.join(" ");
        let content = format!("{} {} {}", record.title, record.category, authors);
        Self {
            id: record.id,
            title: record.title,
            category: record.category,
            authors,
            content,
        }
    }

    /// Text fed to the vectorizer: `title category authors`.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered items plus an identifier -> row index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<CatalogItem>,
    index: AHashMap<String, usize>,
}

impl Corpus {
    /// Builds a corpus from records in the order given.
    ///
    /// Zero records yield an empty corpus; deciding whether that is acceptable
    /// is left to the caller. A repeated identifier fails the whole build.
    pub fn build(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut items = Vec::with_capacity(records.len());
        let mut index = AHashMap::with_capacity(records.len());

        for record in records {
            if index.contains_key(&record.id) {
                return Err(Error::DuplicateItem(record.id));
            }
            index.insert(record.id.clone(), items.len());
            items.push(CatalogItem::from_record(record));
        }

        Ok(Self { items, index })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&CatalogItem> {
        self.items.get(position)
    }

    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn contents(&self) -> Vec<&str> {
        self.items.iter().map(CatalogItem::content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_joins_fields_with_single_spaces() {
        let record = CatalogRecord::new("1", "Dune", "Scifi")
            .with_author("Frank")
            .with_author("Herbert");
        let corpus = Corpus::build(vec![record]).unwrap();
        assert_eq!(corpus.get(0).unwrap().content(), "Dune Scifi Frank Herbert");
        assert_eq!(corpus.get(0).unwrap().authors, "Frank Herbert");
    }

    #[test]
    fn test_missing_authors_render_as_empty_segment() {
        let corpus = Corpus::build(vec![CatalogRecord::new("1", "Dune", "Scifi")]).unwrap();
        let item = corpus.get(0).unwrap();
        assert_eq!(item.authors, "");
        assert_eq!(item.content(), "Dune Scifi ");
    }

    #[test]
    fn test_positions_follow_input_order() {
        let corpus = Corpus::build(vec![
            CatalogRecord::new("b", "Second", "X"),
            CatalogRecord::new("a", "First", "X"),
        ])
        .unwrap();
        assert_eq!(corpus.position("b"), Some(0));
        assert_eq!(corpus.position("a"), Some(1));
        assert_eq!(corpus.position("c"), None);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_zero_records_build_empty_corpus() {
        let corpus = Corpus::build(Vec::new()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let result = Corpus::build(vec![
            CatalogRecord::new("1", "Dune", "Scifi"),
            CatalogRecord::new("1", "Other", "Scifi"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateItem(id)) if id == "1"));
    }

    #[test]
    fn test_record_deserializes_without_authors() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"id":"9","title":"T","category":"C"}"#).unwrap();
        assert!(record.authors.is_empty());
    }
}
