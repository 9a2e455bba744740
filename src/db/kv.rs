//! Key-value storage over the `kv` table.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Storage key for the serialized slides document.
pub const DOCUMENT_KEY: &str = "slides-data";

/// Durable key-value slot store. Every write is a full-value overwrite;
/// there is no partial or delta persistence.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Write `value` under `key`, replacing any previous value.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn test_store() -> (KvStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .expect("Failed to init DB");
        (KvStore::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (store, _dir) = test_store().await;
        assert!(store.get("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let (store, _dir) = test_store().await;
        store.put("k", "one").await.unwrap();
        store.put("k", "two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.sqlite");

        let store = KvStore::new(init_database(&db_path).await.unwrap());
        store.put("k", "v").await.unwrap();
        drop(store);

        let reopened = KvStore::new(init_database(&db_path).await.unwrap());
        assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
