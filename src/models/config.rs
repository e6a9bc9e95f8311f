use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Key of the remote service URL entry.
pub const REMOTE_URL_KEY: &str = "url";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
}
