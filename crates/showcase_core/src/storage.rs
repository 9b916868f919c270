//! Key/value preference storage.

use std::collections::HashMap;

use crate::config::ConfigError;

/// A string key/value store that survives page reloads.
///
/// Backed by `localStorage` in the browser build.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// In-memory store, used by tests and when the browser denies storage access.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
