/**
 * SQLite Settings Store
 *
 * Persists settings as rows of `app_config(appid, configkey, configvalue)`.
 * The table is created by the embedded migrations in `migrations/`.
 */

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::settings::store::{SettingsStore, StorageError};

const UPSERT_SQL: &str = r#"
    INSERT INTO app_config (appid, configkey, configvalue)
    VALUES (?1, ?2, ?3)
    ON CONFLICT (appid, configkey) DO UPDATE SET configvalue = excluded.configvalue
"#;

/// Settings store backed by a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Connect to `database_url` and run migrations
    ///
    /// In-memory databases are pinned to a single connection that is never
    /// recycled, so every query sees the same data.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and run migrations on it
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT configvalue FROM app_config
            WHERE appid = ?1 AND configkey = ?2
            "#,
        )
        .bind(namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn set_value(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(UPSERT_SQL)
            .bind(namespace)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_values(&self, namespace: &str, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;

        for &(key, value) in entries {
            sqlx::query(UPSERT_SQL)
                .bind(namespace)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
