//! Key-value persistence layer backing all durable state.

use crate::error::StoreError;
use async_trait::async_trait;
use directories::BaseDirs;
use log::{debug, info};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the user home holding all Keepsake state.
const DEFAULT_STORE_DIR: &str = ".keepsake";
/// Subdirectory holding the key files.
const STORE_SUBDIR: &str = "store";

#[async_trait]
/// Minimal key-value persistence contract.
///
/// Implementations preserve exactly the last successfully written value
/// per key. There is no multi-key transaction.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key. An absent key is `Ok(None)`,
    /// never an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the value for a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed key-value store keeping one file per key.
pub struct FileKeyValueStore {
    /// Root directory for key files.
    root: PathBuf,
    /// Serialize write access to key files.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a new store under the given root.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!("initialized file key-value store (root={})", root.display());
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Open the store at the default location under the user home.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::new(default_store_root()?)
    }

    /// Build the file path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Build the temporary file path for a key.
    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.tmp"))
    }
}

/// Default store root under the user home directory.
pub fn default_store_root() -> Result<PathBuf, StoreError> {
    let cwd = std::env::current_dir()?;
    if let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) {
        return Ok(home.join(DEFAULT_STORE_DIR).join(STORE_SUBDIR));
    }
    Ok(cwd.join(DEFAULT_STORE_DIR).join(STORE_SUBDIR))
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    /// Read a key file, mapping a missing file to `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!("read key (key={}, value_len={})", key, value.len());
                Ok(Some(value))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Replace a key file atomically via a temporary file and rename.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let path = self.key_path(key);
        let temp_path = self.temp_path(key);
        fs::write(&temp_path, value)?;
        fs::rename(temp_path, path)?;
        debug!("wrote key (key={}, value_len={})", key, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileKeyValueStore, KeyValueStore};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn get_returns_none_for_absent_key() {
        let temp = tempdir().expect("tempdir");
        let store = FileKeyValueStore::new(temp.path()).expect("store");
        assert_eq!(store.get("missing").await.expect("get"), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let temp = tempdir().expect("tempdir");
        let store = FileKeyValueStore::new(temp.path()).expect("store");

        store.set("greeting", "hello").await.expect("set");
        assert_eq!(
            store.get("greeting").await.expect("get"),
            Some("hello".to_string())
        );
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let temp = tempdir().expect("tempdir");
        let store = FileKeyValueStore::new(temp.path()).expect("store");

        store.set("flag", "true").await.expect("set");
        store.set("flag", "false").await.expect("set again");
        assert_eq!(
            store.get("flag").await.expect("get"),
            Some("false".to_string())
        );
    }

    #[tokio::test]
    async fn values_survive_reopening_the_store() {
        let temp = tempdir().expect("tempdir");
        {
            let store = FileKeyValueStore::new(temp.path()).expect("store");
            store.set("greeting", "hello").await.expect("set");
        }
        let store = FileKeyValueStore::new(temp.path()).expect("reopen");
        assert_eq!(
            store.get("greeting").await.expect("get"),
            Some("hello".to_string())
        );
    }
}
