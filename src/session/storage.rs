//! Session persistence boundary.
//!
//! Opaque string key/value storage that lives only as long as the current
//! process (the equivalent of browser session storage). `SessionStore` reads it
//! once at startup and writes it on login and logout.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Key/value storage surviving only the current process.
pub trait SessionStorage: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: String);
    /// Remove `key`; removing an absent key is a no-op
    fn remove(&self, key: &str);
}

/// In-memory `SessionStorage`.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
