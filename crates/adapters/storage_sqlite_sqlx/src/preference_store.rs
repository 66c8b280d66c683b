//! `SQLite` implementation of [`PreferenceStore`].

use std::future::Future;

use sqlx::SqlitePool;

use berlinclock_app::ports::PreferenceStore;
use berlinclock_domain::error::BerlinClockError;

use crate::error::StorageError;

const SELECT_BY_KEY: &str = "SELECT value FROM preferences WHERE key = ?";
const UPSERT: &str = r"
    INSERT INTO preferences (key, value, updated_at)
    VALUES (?, ?, ?)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
";
const DELETE_BY_KEY: &str = "DELETE FROM preferences WHERE key = ?";

/// `SQLite`-backed key-value preference store.
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
}

impl SqlitePreferenceStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, BerlinClockError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT_BY_KEY)
                .bind(key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|(value,)| value))
        }
    }

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), BerlinClockError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            sqlx::query(UPSERT)
                .bind(key)
                .bind(value)
                .bind(chrono::Utc::now().to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), BerlinClockError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            sqlx::query(DELETE_BY_KEY)
                .bind(key)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
