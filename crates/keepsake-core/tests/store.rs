//! Journal store integration tests.

use chrono::{DateTime, Utc};
use keepsake_core::draft::MemoryDraft;
use keepsake_core::error::StoreError;
use keepsake_core::kv::{FileKeyValueStore, KeyValueStore};
use keepsake_core::model::{Category, Memory};
use keepsake_core::picker::ImagePicker;
use keepsake_core::store::{MEMORIES_KEY, MemoryStore};
use keepsake_test_utils::{FailingKeyValueStore, MemoryKeyValueStore, ScriptedImagePicker};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::tempdir;
use uuid::Uuid;

fn memory(content: &str, category: &str) -> Memory {
    Memory {
        id: Uuid::new_v4(),
        content: content.to_string(),
        category: category.to_string(),
        date: Utc::now(),
        image_uri: None,
    }
}

/// The full add/list/remove journey over the stub backend.
#[tokio::test]
async fn add_list_remove_scenario() {
    let store = MemoryStore::new(Arc::new(MemoryKeyValueStore::new()));

    let saved = MemoryDraft::new()
        .content("First steps")
        .category(Category::Milestone)
        .finish()
        .expect("draft");
    store.add(saved.clone()).await.expect("add");

    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, vec![saved.clone()]);
    assert!(!snapshot.is_degraded());

    assert_eq!(store.remove(saved.id).await.expect("remove"), true);
    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, Vec::new());
    assert!(!snapshot.is_degraded());
}

/// Lists come back in exact reverse-insertion order.
#[tokio::test]
async fn list_returns_reverse_insertion_order() {
    let store = MemoryStore::new(Arc::new(MemoryKeyValueStore::new()));

    let mut inserted = Vec::new();
    for index in 0..5 {
        let entry = memory(&format!("memory {index}"), "sweet");
        store.add(entry.clone()).await.expect("add");
        inserted.push(entry);
    }
    inserted.reverse();

    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, inserted);
}

/// A record added with a photo round-trips through disk unchanged.
#[tokio::test]
async fn round_trip_preserves_all_fields() {
    let temp = tempdir().expect("tempdir");
    let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
    let store = MemoryStore::new(backend);

    let mut entry = memory("Drew the whole family", "creative");
    entry.image_uri = Some("file:///photos/family.jpg".to_string());
    store.add(entry.clone()).await.expect("add");

    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, vec![entry]);
}

/// The persisted value is a JSON array with the documented field names.
#[tokio::test]
async fn persisted_value_matches_wire_contract() {
    let temp = tempdir().expect("tempdir");
    let backend = Arc::new(FileKeyValueStore::new(temp.path()).expect("backend"));
    let store = MemoryStore::new(backend.clone());

    let mut entry = memory("Helped set the table", "kind");
    entry.image_uri = Some("file:///photos/table.jpg".to_string());
    store.add(entry.clone()).await.expect("add");

    let raw = backend
        .get(MEMORIES_KEY)
        .await
        .expect("get")
        .expect("stored value");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 1);

    let record = &array[0];
    assert_eq!(record["id"], entry.id.to_string());
    assert_eq!(record["content"], "Helped set the table");
    assert_eq!(record["category"], "kind");
    assert_eq!(record["imageUri"], "file:///photos/table.jpg");
    let date = record["date"].as_str().expect("date string");
    let parsed: DateTime<Utc> = date.parse().expect("rfc3339 date");
    assert_eq!(parsed, entry.date);
}

/// A failed write surfaces to the caller and leaves prior state intact.
#[tokio::test]
async fn write_failure_leaves_prior_state_untouched() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let store = MemoryStore::new(backend.clone());

    let kept = memory("kept", "sweet");
    store.add(kept.clone()).await.expect("add");

    backend.fail_writes("disk full");
    let err = store
        .add(memory("lost", "funny"))
        .await
        .expect_err("write should fail");
    assert!(matches!(err, StoreError::Backend(_)));

    backend.heal_writes();
    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, vec![kept]);
}

/// An unreadable backend degrades the read instead of erroring.
#[tokio::test]
async fn unreadable_backend_degrades_list() {
    let store = MemoryStore::new(Arc::new(FailingKeyValueStore::new("backend offline")));

    let snapshot = store.list().await;
    assert!(snapshot.is_degraded());
    assert_eq!(snapshot.memories, Vec::new());
    let reason = snapshot.degraded.expect("reason");
    assert!(reason.contains("backend offline"));
}

/// Removing an id that was never stored succeeds without changes.
#[tokio::test]
async fn remove_absent_id_is_idempotent() {
    let store = MemoryStore::new(Arc::new(MemoryKeyValueStore::new()));

    assert_eq!(store.remove(Uuid::new_v4()).await.expect("remove"), false);
    assert_eq!(store.list().await.memories, Vec::new());
}

/// The add flow picks up a photo from the picker facility.
#[tokio::test]
async fn draft_attaches_picked_image() {
    let picker = ScriptedImagePicker::picking("file:///photos/cake.jpg");
    let store = MemoryStore::new(Arc::new(MemoryKeyValueStore::new()));

    let mut draft = MemoryDraft::new()
        .content("Blew out both candles")
        .category(Category::Proud);
    let selection = picker.pick().await.expect("pick");
    draft.attach_image(selection);

    let saved = draft.finish().expect("draft");
    assert_eq!(saved.image_uri, Some("file:///photos/cake.jpg".to_string()));
    store.add(saved.clone()).await.expect("add");

    let snapshot = store.list().await;
    assert_eq!(snapshot.memories, vec![saved]);
}

/// A second store over a custom key does not see the default collection.
#[tokio::test]
async fn custom_collection_key_is_independent() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let store = MemoryStore::new(backend.clone());
    let archive = MemoryStore::with_key(backend, "keepsake_archive");

    store.add(memory("current", "sweet")).await.expect("add");

    assert_eq!(archive.list().await.memories, Vec::new());
    assert_eq!(store.list().await.memories.len(), 1);
}
