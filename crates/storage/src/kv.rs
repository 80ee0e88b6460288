//! Key-value store for on-device state
//!
//! This module provides a small, type-safe key-value store backed by sled.
//! Values are stored as JSON so any `serde` type can be persisted.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "linkup_kv.db".to_string(),
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Create a new key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by key (returns true if the key existed)
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Get all keys with a given prefix
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for item in self.db.scan_prefix(prefix.as_bytes()) {
            let (key, _) = item?;
            keys.push(String::from_utf8_lossy(&key).into_owned());
        }

        Ok(keys)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let store = KvStore::in_memory().unwrap();

        store.set("greeting", &"hello".to_string()).unwrap();
        let value: Option<String> = store.get("greeting").unwrap();
        assert_eq!(value, Some("hello".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let store = KvStore::in_memory().unwrap();
        let value: Option<String> = store.get("nope").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_remove() {
        let store = KvStore::in_memory().unwrap();

        store.set("k", &1u32).unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());

        let value: Option<u32> = store.get("k").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_contains() {
        let store = KvStore::in_memory().unwrap();

        assert!(!store.contains("flag").unwrap());
        store.set("flag", &true).unwrap();
        assert!(store.contains("flag").unwrap());
    }

    #[test]
    fn test_keys_with_prefix() {
        let store = KvStore::in_memory().unwrap();

        store.set("settings:theme", &"dark".to_string()).unwrap();
        store.set("settings:language", &"en".to_string()).unwrap();
        store.set("token", &"abc".to_string()).unwrap();

        let mut keys = store.keys_with_prefix("settings:").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["settings:language", "settings:theme"]);
    }

    #[test]
    fn test_struct_round_trip() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Prefs {
            dark_mode: bool,
            scale: f32,
        }

        let store = KvStore::in_memory().unwrap();
        let prefs = Prefs { dark_mode: true, scale: 1.5 };

        store.set("prefs", &prefs).unwrap();
        let loaded: Option<Prefs> = store.get("prefs").unwrap();
        assert_eq!(loaded, Some(prefs));
    }

    #[test]
    fn test_persistence_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv").to_string_lossy().into_owned();

        {
            let store = KvStore::new(KvConfig::new(&path)).unwrap();
            store.set("token", &"persisted".to_string()).unwrap();
            store.flush().unwrap();
        }

        let store = KvStore::new(KvConfig::new(&path)).unwrap();
        let value: Option<String> = store.get("token").unwrap();
        assert_eq!(value, Some("persisted".to_string()));
    }
}
