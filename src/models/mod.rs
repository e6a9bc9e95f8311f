pub mod config;
pub mod course;
pub mod exercise;

pub use config::{ConfigEntry, REMOTE_URL_KEY};
pub use course::{Course, NewCourse};
pub use exercise::{Exercise, NewExercise, display_name_for};
