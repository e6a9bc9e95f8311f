pub mod config;
pub mod courses;
pub mod exercises;
pub mod schema;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqliteConnection;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::fs::{DirectoryProbe, LocalDirectoryProbe};

pub use config::ConfigRepository;
pub use courses::CourseRepository;
pub use exercises::ExerciseRepository;

/// Handle to the tracker database. Construct once at startup and hand out
/// repositories from it.
#[derive(Clone)]
pub struct Store {
    db: SqlitePool,
    probe: Arc<dyn DirectoryProbe>,
}

impl Store {
    /// Opens the database file named by `config`, creating it and its parent
    /// directory when missing, and makes sure the tables exist.
    pub async fn open(config: &StoreConfig) -> StoreResult<Self> {
        let path = &config.database_path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        info!("opening database at {}", path.display());
        Self::connect(options).await
    }

    /// A private store that disappears with the handle.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> StoreResult<Self> {
        // One connection: statements are serialized and an in-memory
        // database stays alive for the lifetime of the pool.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self {
            db,
            probe: Arc::new(LocalDirectoryProbe),
        };
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Replaces the filesystem check used for downloaded status.
    pub fn with_probe(mut self, probe: Arc<dyn DirectoryProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }

    /// Creates any missing table. Existing tables are left alone.
    pub async fn initialize_schema(&self) -> StoreResult<()> {
        let mut conn = self.db.acquire().await?;
        create_tables(&mut conn).await?;
        info!("schema initialized");
        Ok(())
    }

    /// Drops every table and recreates them empty.
    pub async fn reset(&self) -> StoreResult<()> {
        let mut tx = self.db.begin().await?;
        for statement in schema::DROP_TABLES {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        create_tables(&mut tx).await?;
        tx.commit().await?;

        info!("database reset");
        Ok(())
    }

    pub fn courses(&self) -> CourseRepository {
        CourseRepository::new(self.db.clone())
    }

    pub fn exercises(&self) -> ExerciseRepository {
        ExerciseRepository::new(self.db.clone(), self.probe.clone())
    }

    pub fn config(&self) -> ConfigRepository {
        ConfigRepository::new(self.db.clone())
    }
}

async fn create_tables(conn: &mut SqliteConnection) -> StoreResult<()> {
    for statement in schema::CREATE_TABLES {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
