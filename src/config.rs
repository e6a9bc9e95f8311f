use std::env;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

const DB_PATH_VAR: &str = "TMC_DB_PATH";
const DB_FILE_NAME: &str = "tmc.db";

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// `TMC_DB_PATH` if set, otherwise `~/.config/tmc.db`.
    pub fn from_env() -> StoreResult<Self> {
        if let Ok(path) = env::var(DB_PATH_VAR) {
            if !path.trim().is_empty() {
                return Ok(Self::new(path));
            }
        }

        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::Config("Could not determine home directory".to_string()))?;
        Ok(Self::new(default_database_path(&home)))
    }
}

pub fn default_database_path(home: &Path) -> PathBuf {
    home.join(".config").join(DB_FILE_NAME)
}
