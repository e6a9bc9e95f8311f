use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No course selected")]
    NoCourseSelected,

    #[error("No exercise selected")]
    NoExerciseSelected,

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True for the expected "nothing there yet" signals a caller should
    /// prompt the user about, as opposed to storage faults.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            StoreError::NoCourseSelected | StoreError::NoExerciseSelected | StoreError::NotFound
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
