//! Favorite tip ids persisted as a JSON string array.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use log::{debug, warn};
use std::sync::Arc;

/// Storage key holding favorite tip ids.
pub const FAVORITE_TIPS_KEY: &str = "favorite_tips";

/// Favorite tip ids over the key-value layer.
///
/// Stored under its own key, independent of the memory collection.
#[derive(Clone)]
pub struct FavoriteTips {
    /// Injected persistence backend.
    backend: Arc<dyn KeyValueStore>,
}

impl FavoriteTips {
    /// Create the preference over the given backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read the favorite ids in insertion order. Absent or unreadable
    /// values read as empty.
    pub async fn list(&self) -> Vec<String> {
        match self.backend.get(FAVORITE_TIPS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(favorites) => favorites,
                Err(err) => {
                    warn!("corrupt favorites value treated as empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read favorites: {err}");
                Vec::new()
            }
        }
    }

    /// Whether a tip id is currently a favorite.
    pub async fn contains(&self, id: &str) -> bool {
        self.list().await.iter().any(|favorite| favorite == id)
    }

    /// Toggle a tip id, persist the change, and return the updated set.
    pub async fn toggle(&self, id: &str) -> Result<Vec<String>, StoreError> {
        let mut favorites = self.list().await;
        if let Some(index) = favorites.iter().position(|favorite| favorite == id) {
            favorites.remove(index);
        } else {
            favorites.push(id.to_string());
        }
        debug!("toggled favorite (id={}, count={})", id, favorites.len());
        let raw = serde_json::to_string(&favorites)?;
        self.backend.set(FAVORITE_TIPS_KEY, &raw).await?;
        Ok(favorites)
    }
}
