use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: i64,
    pub tid: i64,
    pub name: String,
    pub course_id: i64,
    pub is_selected: bool,
    pub is_completed: bool,
    pub is_downloaded: bool,
    pub is_attempted: bool,
    pub deadline: Option<NaiveDate>,
}

impl Exercise {
    pub fn display_name(&self) -> String {
        display_name_for(&self.name)
    }

    /// Path segments below the course root, one per `-` separated part.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('-').filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exercise \"{}\" (ID {})", self.name, self.tid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    pub tid: i64,
    pub name: String,
    pub course_id: i64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_attempted: bool,
    pub deadline: Option<NaiveDate>,
}

/// Turns a raw exercise name such as `week1-Week1_003.AddingNumbers` into
/// `Week1 - 003 - Adding Numbers`.
///
/// Only the part after the last `-` is used. Its last `.` piece is split on
/// capital letters, and `_` in the remainder becomes ` - `.
pub fn display_name_for(name: &str) -> String {
    let mut rest = match name.rsplit_once('-') {
        Some((_, last)) => last,
        None => name,
    };

    let mut short = "";
    if let Some((head, tail)) = rest.rsplit_once('.') {
        short = tail;
        rest = head;
    }

    let mut realname = String::with_capacity(short.len() + 4);
    for c in short.chars() {
        if c.is_uppercase() && !realname.is_empty() {
            realname.push(' ');
        }
        realname.push(c);
    }

    format!("{} - {}", rest.replace('_', " - "), realname)
}
