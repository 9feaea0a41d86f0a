//! Process-wide presentation preferences.
//!
//! The documentation site persists a theme choice and a selected docs
//! version. Here that is explicit configuration state with `get`/`set`/
//! `on_change` operations and a fixed initialization order: read the
//! persisted value, fall back to the system default, apply, then notify
//! subscribers of later changes. No ambient observers are involved.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// File name of the preferences store.
pub const PREFS_FILENAME: &str = "preferences.json";

/// Default theme when nothing is persisted (defer to the system preference).
const DEFAULT_THEME: &str = "system";

/// Default docs version when nothing is persisted.
const DEFAULT_VERSION: &str = "current";

/// A persisted preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    /// Color theme.
    Theme,
    /// Selected documentation version.
    Version,
}

/// A preference change delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefChange {
    /// The key that changed.
    pub key: PrefKey,
    /// The new value.
    pub value: String,
}

/// Persisted preference values.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefValues {
    /// Color theme.
    theme: String,
    /// Selected documentation version.
    version: String,
}

impl Default for PrefValues {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Durable theme/version preference state with change subscription.
pub struct Preferences {
    /// Path of the backing JSON file.
    path: PathBuf,
    /// Current values.
    values: PrefValues,
    /// Change subscribers, notified after a value is applied and persisted.
    subscribers: Vec<Box<dyn Fn(&PrefChange)>>,
}

impl Preferences {
    /// Opens preferences at an explicit path.
    ///
    /// A missing file yields the defaults; a present but unparsable file is
    /// an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            PrefValues::default()
        };

        Ok(Self {
            path,
            values,
            subscribers: Vec::new(),
        })
    }

    /// Returns the current value for a key.
    pub fn get(&self, key: PrefKey) -> &str {
        match key {
            PrefKey::Theme => &self.values.theme,
            PrefKey::Version => &self.values.version,
        }
    }

    /// Sets a value, persists it, and notifies subscribers.
    pub fn set(&mut self, key: PrefKey, value: &str) -> Result<(), StoreError> {
        match key {
            PrefKey::Theme => self.values.theme = value.to_string(),
            PrefKey::Version => self.values.version = value.to_string(),
        }
        self.save()?;

        let change = PrefChange {
            key,
            value: value.to_string(),
        };
        for subscriber in &self.subscribers {
            subscriber(&change);
        }
        Ok(())
    }

    /// Registers a subscriber for future changes.
    pub fn on_change(&mut self, subscriber: impl Fn(&PrefChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Writes the values back to disk, creating parent directories as needed.
    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.values).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&self.path, contents)?;
        Ok(())
    }
}
