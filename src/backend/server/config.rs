/**
 * Server Configuration
 *
 * Loads the process configuration from environment variables and opens
 * the settings store.
 *
 * # Environment
 *
 * - `SERVER_PORT` - listening port (default 3000)
 * - `DATABASE_URL` - SQLite URL for settings (in-memory store when unset)
 * - `SESSION_SECRET` - secret shared with the host platform
 *
 * # Error Handling
 *
 * A missing or unreachable database is logged and does not prevent
 * startup: the server falls back to the in-memory store.
 */

use std::sync::Arc;

use crate::backend::settings::{MemorySettingsStore, SettingsStore, SqliteSettingsStore};
use crate::shared::config::{ConfigError, ServerConfig};

/// Read `ServerConfig` from the environment
pub fn load_server_config() -> Result<ServerConfig, ConfigError> {
    let mut builder = ServerConfig::builder();

    if let Ok(port) = std::env::var("SERVER_PORT") {
        builder = builder.port_str(&port)?;
    }

    if let Ok(url) = std::env::var("DATABASE_URL") {
        builder = builder.database_url(url);
    }

    match std::env::var("SESSION_SECRET") {
        Ok(secret) => builder = builder.session_secret(secret),
        Err(_) => {
            tracing::warn!("SESSION_SECRET not set. Using the development secret.");
        }
    }

    builder.build()
}

/// Open the configured settings store
///
/// Returns the SQLite store when `database_url` is set and reachable,
/// otherwise an in-memory store.
pub async fn load_settings_store(config: &ServerConfig) -> Arc<dyn SettingsStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Settings will be kept in memory.");
        return Arc::new(MemorySettingsStore::new());
    };

    tracing::info!("Opening settings database...");

    match SqliteSettingsStore::connect(database_url).await {
        Ok(store) => {
            tracing::info!("Settings database ready");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Failed to open settings database: {:?}", e);
            tracing::warn!("Settings will be kept in memory.");
            Arc::new(MemorySettingsStore::new())
        }
    }
}
