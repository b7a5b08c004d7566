//! SQLite-backed progress storage.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, ProgressStore, RepoError};

/// SQLite implementation of the namespaced progress store.
pub struct SqliteProgressStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteProgressStore {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("progress_connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS progress_store (
                namespace TEXT NOT NULL PRIMARY KEY,
                value_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("progress_schema", e))?;

        tracing::debug!(db_path = %db_path, "Progress store ready");

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl ProgressStore for SqliteProgressStore {
    async fn load(&self, namespace: &str) -> Result<Option<String>, RepoError> {
        let row = sqlx::query("SELECT value_json FROM progress_store WHERE namespace = ?")
            .bind(namespace)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("progress_load", e))?;

        Ok(row.map(|row| row.get::<String, _>("value_json")))
    }

    async fn save(&self, namespace: &str, value: &str) -> Result<(), RepoError> {
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO progress_store (namespace, value_json, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(namespace) DO UPDATE SET
                value_json = excluded.value_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(namespace)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("progress_save", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()))
    }

    #[tokio::test]
    async fn missing_namespace_loads_as_none() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("progress.db");
        let store = SqliteProgressStore::new(&db_path.to_string_lossy(), clock())
            .await
            .expect("create store");

        assert_eq!(store.load("echona_music_challenges").await.unwrap(), None);
    }

    #[tokio::test]
    async fn value_persists_across_restart() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("progress.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        {
            let store = SqliteProgressStore::new(&db_path_str, clock())
                .await
                .expect("create store");
            store.save("ns", r#"{"points":10}"#).await.expect("save");
            store.save("ns", r#"{"points":20}"#).await.expect("overwrite");
            // Drop store to simulate restart
        }

        let store = SqliteProgressStore::new(&db_path_str, clock())
            .await
            .expect("reopen store");
        assert_eq!(
            store.load("ns").await.unwrap().as_deref(),
            Some(r#"{"points":20}"#)
        );
        assert_eq!(store.load("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn records_updated_at_from_clock() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("progress.db");
        let store = SqliteProgressStore::new(&db_path.to_string_lossy(), clock())
            .await
            .expect("create store");
        store.save("ns", "{}").await.expect("save");

        let row = sqlx::query("SELECT updated_at FROM progress_store WHERE namespace = 'ns'")
            .fetch_one(&store.pool)
            .await
            .expect("row");
        let updated_at: String = row.get("updated_at");
        assert!(updated_at.starts_with("2023-11-14T22:13:20"));
    }
}
