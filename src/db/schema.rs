pub const CREATE_COURSE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS course (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tid INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    is_selected INTEGER NOT NULL DEFAULT 0,
    path TEXT NOT NULL DEFAULT ''
)
"#;

// No ON DELETE CASCADE: exercises outlive their course row until a reset.
pub const CREATE_EXERCISE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS exercise (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tid INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    course_id INTEGER NOT NULL REFERENCES course(id),
    is_selected INTEGER NOT NULL DEFAULT 0,
    is_completed INTEGER NOT NULL DEFAULT 0,
    is_downloaded INTEGER NOT NULL DEFAULT 0,
    is_attempted INTEGER NOT NULL DEFAULT 0,
    deadline TEXT
)
"#;

pub const CREATE_CONFIG_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS config (
    name TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)
"#;

pub const CREATE_TABLES: [&str; 3] = [
    CREATE_COURSE_TABLE,
    CREATE_EXERCISE_TABLE,
    CREATE_CONFIG_TABLE,
];

// exercise references course, so it goes first.
pub const DROP_TABLES: [&str; 3] = [
    "DROP TABLE IF EXISTS exercise",
    "DROP TABLE IF EXISTS course",
    "DROP TABLE IF EXISTS config",
];
