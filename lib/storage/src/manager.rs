use crate::source::CatalogSource;
use crate::store::{ModelStore, SnapshotInfo};
use folio_core::{Error, Neighbor, RecommenderConfig, Result, Snapshot};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Owns the model store and the catalog source; serves queries and
/// serializes retrains.
pub struct ModelManager {
    store: Arc<ModelStore>,
    source: Arc<dyn CatalogSource>,
    config: RecommenderConfig,
    retrain_lock: Mutex<()>,
}

impl ModelManager {
    pub fn new(source: Arc<dyn CatalogSource>, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: Arc::new(ModelStore::new()),
            source,
            config,
            retrain_lock: Mutex::new(()),
        })
    }

    #[inline]
    pub fn store(&self) -> &Arc<ModelStore> {
        &self.store
    }

    #[inline]
    pub fn info(&self) -> SnapshotInfo {
        self.store.info()
    }

    /// Identifiers of the `top_k` items most similar to `id`.
    pub fn recommend(&self, id: &str) -> Result<Vec<String>> {
        self.store.current().recommend(id, self.config.top_k)
    }

    pub fn recommend_scored(&self, id: &str, limit: usize) -> Result<Vec<Neighbor>> {
        self.store.current().neighbors(id, limit)
    }

    /// Rebuild the model from the catalog source and publish it.
    ///
    /// The new snapshot is built off to the side; the live one is only
    /// replaced once the build has succeeded with a non-empty corpus. A call
    /// made while another retrain runs fails with `Busy` right away.
    pub fn retrain(&self) -> Result<SnapshotInfo> {
        let _guard = match self.retrain_lock.try_lock() {
            Some(guard) => guard,
            None => {
                debug!("Rejecting retrain: another retrain is running");
                return Err(Error::Busy);
            }
        };

        info!("Training recommendation model...");
        let started = Instant::now();

        let snapshot = match self
            .source
            .fetch_all()
            .and_then(|records| Snapshot::build(records, &self.config))
        {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    "Retrain failed, keeping generation {}: {}",
                    self.store.info().generation,
                    e
                );
                return Err(e);
            }
        };

        let info = self.store.publish(snapshot);
        info!(
            "Model trained: generation {}, {} items, {} terms in {:?}",
            info.generation,
            info.items,
            info.vocabulary_size,
            started.elapsed()
        );
        Ok(info)
    }
}
