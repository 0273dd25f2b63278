use chrono::{DateTime, Utc};
use folio_core::Snapshot;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Summary of a published snapshot for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// 0 for the untrained model, +1 per publish.
    pub generation: u64,
    pub items: usize,
    pub vocabulary_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_at: Option<DateTime<Utc>>,
}

struct Published {
    snapshot: Arc<Snapshot>,
    info: SnapshotInfo,
}

/// Holds the one live snapshot.
///
/// Readers clone the `Arc` under a read lock and keep using it for as long as
/// they like; `publish` takes the write lock only for the pointer swap.
pub struct ModelStore {
    live: RwLock<Published>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self {
            live: RwLock::new(Published {
                snapshot: Arc::new(Snapshot::empty()),
                info: SnapshotInfo {
                    generation: 0,
                    items: 0,
                    vocabulary_size: 0,
                    built_at: None,
                },
            }),
        }
    }

    #[inline]
    pub fn current(&self) -> Arc<Snapshot> {
        self.live.read().snapshot.clone()
    }

    #[inline]
    pub fn info(&self) -> SnapshotInfo {
        self.live.read().info.clone()
    }

    /// Both halves read under one lock so they always describe the same build.
    pub fn current_with_info(&self) -> (Arc<Snapshot>, SnapshotInfo) {
        let live = self.live.read();
        (live.snapshot.clone(), live.info.clone())
    }

    /// Replace the live snapshot and return its info.
    pub fn publish(&self, snapshot: Snapshot) -> SnapshotInfo {
        let items = snapshot.len();
        let vocabulary_size = snapshot.vocabulary_size();
        let snapshot = Arc::new(snapshot);

        let mut live = self.live.write();
        let info = SnapshotInfo {
            generation: live.info.generation + 1,
            items,
            vocabulary_size,
            built_at: Some(Utc::now()),
        };
        let old = std::mem::replace(
            &mut *live,
            Published {
                snapshot,
                info: info.clone(),
            },
        );
        drop(live);
        // The superseded matrix may be large; free it outside the lock.
        drop(old);
        info
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{CatalogRecord, RecommenderConfig};

    fn snapshot(ids: &[&str]) -> Snapshot {
        let records = ids
            .iter()
            .map(|id| CatalogRecord::new(*id, format!("title {}", id), "category"))
            .collect();
        Snapshot::build(records, &RecommenderConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let store = ModelStore::new();
        assert!(store.current().is_empty());
        assert_eq!(store.info().generation, 0);
        assert!(store.info().built_at.is_none());
    }

    #[test]
    fn test_publish_swaps_and_bumps_generation() {
        let store = ModelStore::new();
        let info = store.publish(snapshot(&["a", "b"]));
        assert_eq!(info.generation, 1);
        assert_eq!(info.items, 2);
        assert_eq!(store.current().len(), 2);

        let info = store.publish(snapshot(&["c"]));
        assert_eq!(info.generation, 2);
        assert!(store.current().contains("c"));
        assert!(!store.current().contains("a"));
    }

    #[test]
    fn test_superseded_snapshot_released_after_publish() {
        let store = ModelStore::new();
        store.publish(snapshot(&["a", "b"]));
        let weak = Arc::downgrade(&store.current());
        store.publish(snapshot(&["x"]));
        assert!(weak.upgrade().is_none());
        assert!(store.live.try_read().is_some());
    }

    #[test]
    fn test_captured_snapshot_survives_publish() {
        let store = ModelStore::new();
        store.publish(snapshot(&["a", "b"]));
        let held = store.current();
        store.publish(snapshot(&["x"]));
        assert!(held.contains("a"));
        assert_eq!(held.recommend("a", 5).unwrap(), vec!["b"]);
    }
}
