use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Catalog data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Catalog data source returned no items")]
    EmptyCorpus,

    #[error("A retrain is already in progress")]
    Busy,

    #[error("Duplicate item identifier: {0}")]
    DuplicateItem(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for failures that happen while building a model, as opposed to
    /// query-time misses or contention.
    #[must_use]
    pub fn is_build_failure(&self) -> bool {
        matches!(
            self,
            Error::DataSourceUnavailable(_) | Error::EmptyCorpus | Error::DuplicateItem(_)
        )
    }
}
