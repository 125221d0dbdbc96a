//! Configuration schema for Keepsake.

use serde::{Deserialize, Serialize};

/// Root config for the Keepsake engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeepsakeConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub reminders: RemindersConfig,
}

impl KeepsakeConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> KeepsakeConfigBuilder {
        KeepsakeConfigBuilder::new()
    }
}

/// Builder for assembling a `KeepsakeConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct KeepsakeConfigBuilder {
    config: KeepsakeConfig,
}

impl KeepsakeConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: KeepsakeConfig::default(),
        }
    }

    /// Replace the journal storage configuration.
    pub fn journal(mut self, journal: JournalConfig) -> Self {
        self.config.journal = journal;
        self
    }

    /// Replace the daily reminder configuration.
    pub fn reminders(mut self, reminders: RemindersConfig) -> Self {
        self.config.reminders = reminders;
        self
    }

    /// Finalize and return the built `KeepsakeConfig`.
    pub fn build(self) -> KeepsakeConfig {
        self.config
    }
}

/// Storage location for the journal's key-value backing store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalConfig {
    /// Root directory for persisted values; `None` selects the per-user default.
    #[serde(default)]
    pub path: Option<String>,
}

/// Daily wisdom reminder scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersConfig {
    /// Wall-clock hour reminders fire at.
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
    /// Wall-clock minute reminders fire at.
    #[serde(default = "default_reminder_minute")]
    pub minute: u32,
    /// Number of consecutive days to schedule ahead.
    #[serde(default = "default_reminder_days")]
    pub days: u32,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            hour: default_reminder_hour(),
            minute: default_reminder_minute(),
            days: default_reminder_days(),
        }
    }
}

/// Default reminder hour (19:30 local wall clock).
fn default_reminder_hour() -> u32 {
    19
}

/// Default reminder minute.
fn default_reminder_minute() -> u32 {
    30
}

/// Default number of days scheduled per enable.
fn default_reminder_days() -> u32 {
    7
}
