//! Durable journal store over the key-value layer.
//!
//! The collection is rewritten whole on every mutation and is expected to
//! stay at personal-journal size (hundreds of entries).

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::model::Memory;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Storage key holding the journal collection.
pub const MEMORIES_KEY: &str = "keepsake_memories";

/// Result of reading the journal collection.
///
/// Reading never fails visibly. A corrupt or unreadable stored value
/// produces an empty snapshot carrying the underlying error, so callers
/// can tell possible data loss apart from an empty journal.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Records in persisted order, newest insert first.
    pub memories: Vec<Memory>,
    /// Error preserved from a corrupt or unreadable stored value.
    pub degraded: Option<String>,
}

impl Snapshot {
    /// Whether the stored value could not be read or decoded.
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Sole authority over the persisted memory collection.
///
/// Every mutation reads the full collection, transforms it in memory,
/// and rewrites the whole value under the same key. Mutations are not
/// mutually exclusive: concurrent read-modify-write cycles can race,
/// with last-write-wins at whole-collection granularity.
#[derive(Clone)]
pub struct MemoryStore {
    /// Injected persistence backend.
    backend: Arc<dyn KeyValueStore>,
    /// Collection key.
    key: String,
}

impl MemoryStore {
    /// Create a store over the given backend using the default key.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, MEMORIES_KEY)
    }

    /// Create a store over the given backend and collection key.
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Prepend a memory to the collection and persist it.
    ///
    /// An unreadable current value is treated as an empty collection, so
    /// a save never fails on prior corruption. On write failure the
    /// previously persisted value is untouched.
    pub async fn add(&self, memory: Memory) -> Result<(), StoreError> {
        let mut memories = self.load_lenient().await;
        info!(
            "adding memory (id={}, category={}, content_len={})",
            memory.id,
            memory.category,
            memory.content.len()
        );
        memories.insert(0, memory);
        self.persist(&memories).await
    }

    /// Read the full collection in persisted order.
    pub async fn list(&self) -> Snapshot {
        match self.backend.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Memory>>(&raw) {
                Ok(memories) => {
                    debug!("listed memories (key={}, count={})", self.key, memories.len());
                    Snapshot {
                        memories,
                        degraded: None,
                    }
                }
                Err(err) => {
                    warn!("corrupt memory collection (key={}): {err}", self.key);
                    Snapshot {
                        memories: Vec::new(),
                        degraded: Some(err.to_string()),
                    }
                }
            },
            Ok(None) => Snapshot {
                memories: Vec::new(),
                degraded: None,
            },
            Err(err) => {
                warn!("failed to read memory collection (key={}): {err}", self.key);
                Snapshot {
                    memories: Vec::new(),
                    degraded: Some(err.to_string()),
                }
            }
        }
    }

    /// Remove a memory by id, rewriting the collection without it.
    ///
    /// Idempotent: removing an absent id succeeds and returns `false`
    /// without rewriting the stored value.
    pub async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut memories = self.load_lenient().await;
        let before = memories.len();
        memories.retain(|memory| memory.id != id);
        if memories.len() == before {
            debug!("memory not found (id={})", id);
            return Ok(false);
        }
        info!("removing memory (id={})", id);
        self.persist(&memories).await?;
        Ok(true)
    }

    /// Load the collection for a mutation, treating unreadable state as
    /// empty.
    async fn load_lenient(&self) -> Vec<Memory> {
        match self.backend.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(memories) => memories,
                Err(err) => {
                    warn!(
                        "corrupt memory collection treated as empty (key={}): {err}",
                        self.key
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "unreadable memory collection treated as empty (key={}): {err}",
                    self.key
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the whole collection under the store key.
    async fn persist(&self, memories: &[Memory]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(memories)?;
        self.backend.set(&self.key, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::{MEMORIES_KEY, MemoryStore};
    use crate::kv::{FileKeyValueStore, KeyValueStore};
    use crate::model::Memory;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn memory(content: &str) -> Memory {
        Memory {
            id: Uuid::new_v4(),
            content: content.to_string(),
            category: "sweet".to_string(),
            date: Utc::now(),
            image_uri: None,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_intact_empty_snapshot() {
        let temp = tempdir().expect("tempdir");
        let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
        let store = MemoryStore::new(backend);

        let snapshot = store.list().await;
        assert_eq!(snapshot.memories, Vec::new());
        assert!(!snapshot.is_degraded());
    }

    #[tokio::test]
    async fn adds_list_newest_first() {
        let temp = tempdir().expect("tempdir");
        let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
        let store = MemoryStore::new(backend);

        let first = memory("first");
        let second = memory("second");
        store.add(first.clone()).await.expect("add first");
        store.add(second.clone()).await.expect("add second");

        let snapshot = store.list().await;
        assert_eq!(snapshot.memories, vec![second, first]);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let temp = tempdir().expect("tempdir");
        let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
        let store = MemoryStore::new(backend);

        let kept = memory("kept");
        let removed = memory("removed");
        store.add(kept.clone()).await.expect("add kept");
        store.add(removed.clone()).await.expect("add removed");

        assert_eq!(store.remove(removed.id).await.expect("remove"), true);
        assert_eq!(store.remove(removed.id).await.expect("remove again"), false);

        let snapshot = store.list().await;
        assert_eq!(snapshot.memories, vec![kept]);
    }

    #[tokio::test]
    async fn corrupt_value_degrades_list_but_not_add() {
        let temp = tempdir().expect("tempdir");
        let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
        backend
            .set(MEMORIES_KEY, "not json")
            .await
            .expect("seed corrupt value");
        let store = MemoryStore::new(backend);

        let snapshot = store.list().await;
        assert!(snapshot.is_degraded());
        assert_eq!(snapshot.memories, Vec::new());

        let fresh = memory("fresh start");
        store.add(fresh.clone()).await.expect("add");
        let snapshot = store.list().await;
        assert!(!snapshot.is_degraded());
        assert_eq!(snapshot.memories, vec![fresh]);
    }

    #[tokio::test]
    async fn remove_on_absent_id_leaves_stored_value_untouched() {
        let temp = tempdir().expect("tempdir");
        let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
        backend
            .set(MEMORIES_KEY, "not json")
            .await
            .expect("seed corrupt value");
        let store = MemoryStore::new(backend.clone());

        assert_eq!(store.remove(Uuid::new_v4()).await.expect("remove"), false);
        assert_eq!(
            backend.get(MEMORIES_KEY).await.expect("get"),
            Some("not json".to_string())
        );
    }
}
