//! JSON5 config loading and validation.
//!
//! Loads a single config file, checks it against the schema, and produces a
//! final `KeepsakeConfig`. There is no layer stack; one file holds the whole
//! configuration.

use crate::{ConfigError, KeepsakeConfig};
use directories::UserDirs;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "keepsake.json5";
/// Default config directory under the user home.
const DEFAULT_CONFIG_DIR: &str = ".keepsake";

/// Default user config path under the home directory.
pub fn default_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}

impl KeepsakeConfig {
    /// Load a config from a JSON5 file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, "config")
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reminders.hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "reminders.hour must be 0-23, got {}",
                self.reminders.hour
            )));
        }
        if self.reminders.minute > 59 {
            return Err(ConfigError::Invalid(format!(
                "reminders.minute must be 0-59, got {}",
                self.reminders.minute
            )));
        }
        if self.reminders.days == 0 {
            return Err(ConfigError::Invalid(
                "reminders.days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validate the schema, decode, and run invariant checks.
fn config_from_value(value: Value, label: &str) -> Result<KeepsakeConfig, ConfigError> {
    validate_schema(&value, label)?;
    let config: KeepsakeConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}

/// Validate a raw config value against the schema.
fn validate_schema(value: &Value, label: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, "")?;
    ensure_allowed_keys(map, &["$schema", "journal", "reminders"], label, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, label, "$schema")?;
    }
    if let Some(value) = map.get("journal") {
        validate_journal(value, label, "journal")?;
    }
    if let Some(value) = map.get("reminders") {
        validate_reminders(value, label, "reminders")?;
    }
    Ok(())
}

/// Validate the "journal" block.
fn validate_journal(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, path)?;
    ensure_allowed_keys(map, &["path"], label, path)?;

    if let Some(value) = map.get("path") {
        expect_string(value, label, &join_path(path, "path"))?;
    }
    Ok(())
}

/// Validate the "reminders" block.
fn validate_reminders(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, path)?;
    ensure_allowed_keys(map, &["hour", "minute", "days"], label, path)?;

    for key in ["hour", "minute", "days"] {
        if let Some(value) = map.get(key) {
            expect_u64(value, label, &join_path(path, key))?;
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    label: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(label, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected string"))
    }
}

/// Expect a JSON u64 or return a typed error.
fn expect_u64(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_u64() || value.is_i64() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected integer"))
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    label: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(label, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(label: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{label}:{normalized_path}"),
        message: message.to_string(),
    }
}
