//! Error types for store and reminder operations.

/// Errors returned by the key-value layer and the memory store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Backend-specific fault.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors returned by the daily reminder toggle.
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// Persisting the preference flag failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The notification facility rejected a request.
    #[error("notification error: {0}")]
    Notify(String),
    /// The configured fire time is not a valid wall-clock time.
    #[error("invalid reminder time: {hour:02}:{minute:02}")]
    InvalidTime {
        /// Configured hour.
        hour: u32,
        /// Configured minute.
        minute: u32,
    },
}
