// Catalog data sources
use folio_core::{CatalogRecord, Error, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

/// Anything that can hand over the full catalog in a stable order.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<CatalogRecord>>;
}

/// Reads a JSON array of records from disk on every fetch.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Vec<CatalogRecord>> {
        let data = std::fs::read(&self.path).map_err(|e| {
            Error::DataSourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_slice(&data).map_err(|e| {
            Error::DataSourceUnavailable(format!("{}: invalid catalog: {}", self.path.display(), e))
        })
    }
}

/// In-memory records that can be swapped at runtime.
#[derive(Default)]
pub struct StaticSource {
    records: RwLock<Vec<CatalogRecord>>,
}

impl StaticSource {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn replace(&self, records: Vec<CatalogRecord>) {
        *self.records.write() = records;
    }
}

impl CatalogSource for StaticSource {
    fn fetch_all(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records.read().clone())
    }
}
