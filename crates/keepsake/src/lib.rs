//! Public surface for the Keepsake memory journal.
//!
//! Re-exports the engine and configuration crates under short names and
//! offers a logging bootstrap so every embedder wires output the same way.

/// Re-export for convenience.
pub use keepsake_config as config;
/// Re-export for convenience.
pub use keepsake_core as core;

pub use keepsake_config::KeepsakeConfig;
pub use keepsake_core::{
    Category, DailyTips, FavoriteTips, FileKeyValueStore, KeyValueStore, Memory, MemoryDraft,
    MemoryStore, ReminderScheduler, Snapshot, StoreError,
};

/// Open the file-backed key-value store selected by a config.
///
/// A configured `journal.path` is used as the storage root; without one
/// the per-user default location applies.
pub fn open_store(config: &KeepsakeConfig) -> Result<FileKeyValueStore, StoreError> {
    match &config.journal.path {
        Some(path) => FileKeyValueStore::new(path),
        None => FileKeyValueStore::open_default(),
    }
}

#[inline]
/// Initialize logging through env_logger when the "logging" feature is on.
///
/// Without the feature this does nothing. Embedding applications should
/// still call it early in startup so log output appears once wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
