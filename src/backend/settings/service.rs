/**
 * Configuration Service
 *
 * Typed access to the six bridge settings on top of a `SettingsStore`.
 *
 * # Read Semantics
 *
 * A read returns the stored value, or the key's default when the value is
 * unset or empty. Nothing is cached: every read goes to the store.
 *
 * # Write Semantics
 *
 * Writes store the raw string with no validation or normalization.
 */

use std::sync::Arc;

use crate::backend::settings::store::{SettingsStore, StorageError};
use crate::shared::settings::{ChatSettings, SettingKey, SettingsUpdate, APP_NAMESPACE};

/// Settings accessor shared by all handlers
#[derive(Clone)]
pub struct ConfigService {
    store: Arc<dyn SettingsStore>,
}

impl ConfigService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Current value of `key`, falling back to its default
    pub async fn get(&self, key: SettingKey) -> Result<String, StorageError> {
        let value = self.store.get_value(APP_NAMESPACE, key.as_str()).await?;
        Ok(value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| key.default_value().to_string()))
    }

    /// Store `value` for `key` as-is
    pub async fn set(&self, key: SettingKey, value: &str) -> Result<(), StorageError> {
        self.store.set_value(APP_NAMESPACE, key.as_str(), value).await?;
        tracing::info!("Updated setting {}", key);
        Ok(())
    }

    /// Read all six settings
    pub async fn snapshot(&self) -> Result<ChatSettings, StorageError> {
        let mut settings = ChatSettings::default();
        for key in SettingKey::ALL {
            settings.set(key, self.get(key).await?);
        }
        Ok(settings)
    }

    /// Write every field present in `update` in one batch
    ///
    /// A storage failure leaves every setting unchanged.
    pub async fn apply(&self, update: &SettingsUpdate) -> Result<(), StorageError> {
        let entries: Vec<(&str, &str)> = update
            .entries()
            .into_iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        if entries.is_empty() {
            return Ok(());
        }

        self.store.set_values(APP_NAMESPACE, &entries).await?;
        tracing::info!(
            "Updated settings {}",
            entries.iter().map(|(key, _)| *key).collect::<Vec<_>>().join(", ")
        );
        Ok(())
    }

    pub async fn matrix_server_name(&self) -> Result<String, StorageError> {
        self.get(SettingKey::MatrixServerName).await
    }

    pub async fn element_call_url(&self) -> Result<String, StorageError> {
        self.get(SettingKey::ElementCallUrl).await
    }
}
