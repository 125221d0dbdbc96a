use async_trait::async_trait;
use keepsake_core::error::StoreError;
use keepsake_core::kv::KeyValueStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory key-value store with optional write-failure injection.
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<Option<String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent write fail with the given message.
    pub fn fail_writes(&self, message: impl Into<String>) {
        *self.fail_writes.lock() = Some(message.into());
    }

    /// Let writes succeed again.
    pub fn heal_writes(&self) {
        *self.fail_writes.lock() = None;
    }

    /// Snapshot of everything stored.
    pub fn values(&self) -> HashMap<String, String> {
        self.values.lock().clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(message) = self.fail_writes.lock().clone() {
            return Err(StoreError::Backend(message));
        }
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value store whose reads and writes always fail.
pub struct FailingKeyValueStore {
    message: String,
}

impl FailingKeyValueStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl KeyValueStore for FailingKeyValueStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend(self.message.clone()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(self.message.clone()))
    }
}
