//! In-memory settings store
//!
//! Holds the flat record collection the tree is built from and applies
//! record-level edits. Nothing is persisted; callers export with
//! [`SettingsStore::to_json`] when they want the edited collection back.

mod seed;

pub use seed::sample_settings;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use settings_tree::{build_forest, insert_ids, Setting, TreeError, TreeNode};
use tracing::{debug, warn};

/// Errors from loading or editing the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Duplicate setting id: '{0}'")]
    Duplicate(String),

    #[error("No setting with path '{path}' and key '{key}'")]
    NotFound { path: String, key: String },
}

/// Acknowledgement of a delete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub path: String,
    pub key: String,
    /// False when nothing matched
    pub removed: bool,
}

/// Single-owner collection of setting records
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Vec<Setting>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the bundled sample dataset
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_records(&sample_settings()?)
    }

    /// Assign ids and take ownership of `records`.
    ///
    /// Fails on an invalid path or a duplicate id.
    pub fn from_records(records: &[Setting]) -> Result<Self, StoreError> {
        let settings = insert_ids(records)?;
        ensure_unique(&settings)?;
        debug!(records = settings.len(), "settings store loaded");
        Ok(Self { settings })
    }

    /// Parse a JSON array of records; ids are optional
    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let records: Vec<Setting> = serde_json::from_str(raw)?;
        Self::from_records(&records)
    }

    /// Load a JSON settings file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[Setting] {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Record with the given path and key
    pub fn get(&self, path: &str, key: &str) -> Option<&Setting> {
        self.settings.iter().rev().find(|s| s.same_setting(path, key))
    }

    /// Add a new record.
    ///
    /// The id is synthesized when missing. A record whose id or path/key is
    /// already present is rejected.
    pub fn create(&mut self, setting: Setting) -> Result<Setting, StoreError> {
        let setting = with_id(setting)?;
        if self
            .settings
            .iter()
            .any(|s| s.id == setting.id || s.same_setting(&setting.path, &setting.key))
        {
            return Err(StoreError::Duplicate(setting.id));
        }
        debug!(id = %setting.id, "setting created");
        self.settings.push(setting.clone());
        Ok(setting)
    }

    /// Replace the record with the same path and key (last match wins).
    ///
    /// The replacement may not take an id owned by another record.
    pub fn update(&mut self, setting: Setting) -> Result<Setting, StoreError> {
        let setting = with_id(setting)?;
        let index = self
            .settings
            .iter()
            .rposition(|s| s.same_setting(&setting.path, &setting.key))
            .ok_or_else(|| StoreError::NotFound {
                path: setting.path.clone(),
                key: setting.key.clone(),
            })?;
        if self
            .settings
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && s.id == setting.id)
        {
            return Err(StoreError::Duplicate(setting.id));
        }
        debug!(id = %setting.id, "setting updated");
        self.settings[index] = setting.clone();
        Ok(setting)
    }

    /// Update when the setting exists, create it otherwise
    pub fn upsert(&mut self, path: &str, key: &str, value: &str) -> Result<Setting, StoreError> {
        let setting = Setting::new(path, key, value)?;
        if self.get(path, key).is_some() {
            self.update(setting)
        } else {
            self.create(setting)
        }
    }

    /// Remove the record with the given path and key
    pub fn delete(&mut self, path: &str, key: &str) -> DeleteAck {
        let removed = match self.settings.iter().position(|s| s.same_setting(path, key)) {
            Some(index) => {
                self.settings.remove(index);
                debug!(path, key, "setting deleted");
                true
            }
            None => {
                warn!(path, key, "delete ignored, no matching setting");
                false
            }
        };
        DeleteAck {
            path: path.to_string(),
            key: key.to_string(),
            removed,
        }
    }

    /// Swap the whole collection for an edited JSON document.
    ///
    /// The store is left untouched when the document is rejected.
    pub fn replace_from_json(&mut self, raw: &str) -> Result<usize, StoreError> {
        let replacement = Self::from_json_str(raw)?;
        self.settings = replacement.settings;
        Ok(self.settings.len())
    }

    /// Pretty JSON of the collection
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.settings)
    }

    /// Compacted tree of the current collection
    pub fn forest(&self) -> Result<Vec<TreeNode>, TreeError> {
        build_forest(&self.settings)
    }
}

fn with_id(setting: Setting) -> Result<Setting, StoreError> {
    Ok(insert_ids(std::slice::from_ref(&setting))?
        .pop()
        .unwrap_or(setting))
}

fn ensure_unique(settings: &[Setting]) -> Result<(), StoreError> {
    let mut ids = HashSet::new();
    for s in settings {
        if !ids.insert(s.id.as_str()) {
            return Err(StoreError::Duplicate(s.id.clone()));
        }
    }
    Ok(())
}
