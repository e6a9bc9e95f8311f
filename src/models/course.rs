use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub tid: i64,
    pub name: String,
    pub is_selected: bool,
    pub path: String,
}

impl Course {
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Course \"{}\" (ID {})", self.name, self.tid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub tid: i64,
    pub name: String,
    #[serde(default)]
    pub path: String,
}
