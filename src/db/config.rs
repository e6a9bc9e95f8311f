use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{ConfigEntry, REMOTE_URL_KEY};

pub struct ConfigRepository {
    db: SqlitePool,
}

impl ConfigRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Inserts or overwrites `name` in one statement.
    pub async fn set(&self, name: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO config (name, value)
            VALUES (?1, ?2)
            ON CONFLICT(name) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(name)
        .bind(value)
        .execute(&self.db)
        .await?;

        debug!("config {} set", name);
        Ok(())
    }

    pub async fn get(&self, name: &str) -> StoreResult<String> {
        sqlx::query_scalar::<_, String>("SELECT value FROM config WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    pub async fn list(&self) -> StoreResult<Vec<ConfigEntry>> {
        let entries = sqlx::query_as::<_, ConfigEntry>(
            "SELECT name, value FROM config ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(entries)
    }

    /// Whether the remote service URL has been stored yet.
    pub async fn has_remote_configured(&self) -> StoreResult<bool> {
        match self.get(REMOTE_URL_KEY).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    async fn setup_test_db() -> Store {
        Store::open_in_memory()
            .await
            .expect("Failed to create test db")
    }

    #[tokio::test]
    async fn test_set_then_overwrite() {
        let store = setup_test_db().await;
        let config = store.config();

        config.set("url", "a").await.unwrap();
        config.set("url", "b").await.unwrap();
        assert_eq!(config.get("url").await.unwrap(), "b");

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM config WHERE name = 'url'")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = setup_test_db().await;
        assert!(matches!(
            store.config().get("token").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_returns_entries_by_name() {
        let store = setup_test_db().await;
        let config = store.config();
        assert!(config.list().await.unwrap().is_empty());

        config.set("url", "https://tmc.example.org").await.unwrap();
        config.set("username", "u").await.unwrap();
        config.set("url", "https://other.example.org").await.unwrap();

        let entries = config.list().await.unwrap();
        assert_eq!(
            entries,
            vec![
                ConfigEntry {
                    name: "url".to_string(),
                    value: "https://other.example.org".to_string(),
                },
                ConfigEntry {
                    name: "username".to_string(),
                    value: "u".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_has_remote_configured() {
        let store = setup_test_db().await;
        let config = store.config();

        assert!(!config.has_remote_configured().await.unwrap());
        config.set("username", "u").await.unwrap();
        assert!(!config.has_remote_configured().await.unwrap());
        config.set("url", "").await.unwrap();
        assert!(config.has_remote_configured().await.unwrap());
    }
}
