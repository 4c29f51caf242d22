/**
 * Settings Store
 *
 * The host platform's generic key/value settings API, seen from the
 * bridge: raw string values addressed by (namespace, key). The store knows
 * nothing about defaults or which keys exist; `ConfigService` adds that.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

/// Settings storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database query failed
    #[error("Settings storage error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Settings storage migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Key/value settings backend
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored value, `None` when the key was never written
    async fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a raw value, replacing any previous one
    async fn set_value(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError>;

    /// Store several values at once; either all of them are written or none
    async fn set_values(&self, namespace: &str, entries: &[(&str, &str)]) -> Result<(), StorageError>;
}

/// Process-local settings store
///
/// Used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<(String, String), String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().await;
        Ok(values.get(&(namespace.to_string(), key.to_string())).cloned())
    }

    async fn set_value(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn set_values(&self, namespace: &str, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        for &(key, value) in entries {
            values.insert((namespace.to_string(), key.to_string()), value.to_string());
        }
        Ok(())
    }
}
