use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::fs::DirectoryProbe;
use crate::models::{Course, Exercise, NewExercise};

pub struct ExerciseRepository {
    db: SqlitePool,
    probe: Arc<dyn DirectoryProbe>,
}

impl ExerciseRepository {
    pub fn new(db: SqlitePool, probe: Arc<dyn DirectoryProbe>) -> Self {
        Self { db, probe }
    }

    /// Registers an exercise from a remote listing, or refreshes the remote
    /// fields of a known one. Selection and downloaded state are local and
    /// survive a refresh.
    pub async fn upsert(&self, req: NewExercise) -> StoreResult<Exercise> {
        sqlx::query(
            r#"
            INSERT INTO exercise (tid, name, course_id, is_completed, is_attempted, deadline)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(tid) DO UPDATE SET
                name = excluded.name,
                course_id = excluded.course_id,
                is_completed = excluded.is_completed,
                is_attempted = excluded.is_attempted,
                deadline = excluded.deadline
            "#,
        )
        .bind(req.tid)
        .bind(&req.name)
        .bind(req.course_id)
        .bind(req.is_completed)
        .bind(req.is_attempted)
        .bind(req.deadline)
        .execute(&self.db)
        .await?;

        debug!("upserted exercise tid={}", req.tid);
        self.find_by_external_id(req.tid).await
    }

    pub async fn get(&self, id: i64) -> StoreResult<Exercise> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, tid, name, course_id, is_selected, is_completed,
                is_downloaded, is_attempted, deadline
            FROM exercise
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Exact lookup by remote id. `tid` is unique, so there is at most one.
    pub async fn find_by_external_id(&self, tid: i64) -> StoreResult<Exercise> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, tid, name, course_id, is_selected, is_completed,
                is_downloaded, is_attempted, deadline
            FROM exercise
            WHERE tid = ?
            "#,
        )
        .bind(tid)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn list_for_course(&self, course: &Course) -> StoreResult<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, tid, name, course_id, is_selected, is_completed,
                is_downloaded, is_attempted, deadline
            FROM exercise
            WHERE course_id = ?
            ORDER BY tid
            "#,
        )
        .bind(course.id)
        .fetch_all(&self.db)
        .await?;
        Ok(exercises)
    }

    pub async fn course_of(&self, exercise: &Exercise) -> StoreResult<Course> {
        sqlx::query_as::<_, Course>(
            "SELECT id, tid, name, is_selected, path FROM course WHERE id = ?",
        )
        .bind(exercise.course_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Persists everything but the selection flag, which only moves through
    /// [`ExerciseRepository::select`].
    pub async fn save(&self, exercise: &Exercise) -> StoreResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE exercise
            SET name = ?1,
                course_id = ?2,
                is_completed = ?3,
                is_downloaded = ?4,
                is_attempted = ?5,
                deadline = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&exercise.name)
        .bind(exercise.course_id)
        .bind(exercise.is_completed)
        .bind(exercise.is_downloaded)
        .bind(exercise.is_attempted)
        .bind(exercise.deadline)
        .bind(exercise.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub async fn update_status(
        &self,
        exercise: &mut Exercise,
        is_completed: bool,
        is_attempted: bool,
    ) -> StoreResult<()> {
        let updated = sqlx::query(
            "UPDATE exercise SET is_completed = ?1, is_attempted = ?2 WHERE id = ?3",
        )
        .bind(is_completed)
        .bind(is_attempted)
        .bind(exercise.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        exercise.is_completed = is_completed;
        exercise.is_attempted = is_attempted;
        Ok(())
    }

    /// Makes `exercise` the only selected exercise. Course selection is not
    /// touched.
    pub async fn select(&self, exercise: &mut Exercise) -> StoreResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("UPDATE exercise SET is_selected = 0 WHERE is_selected = 1")
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query("UPDATE exercise SET is_selected = 1 WHERE id = ?")
            .bind(exercise.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        tx.commit().await?;

        exercise.is_selected = true;
        debug!("selected {}", exercise);
        Ok(())
    }

    pub async fn get_selected(&self) -> StoreResult<Exercise> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, tid, name, course_id, is_selected, is_completed,
                is_downloaded, is_attempted, deadline
            FROM exercise
            WHERE is_selected = 1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NoExerciseSelected)
    }

    /// Course root followed by one directory per `-` separated part of the
    /// exercise name.
    pub async fn resolve_path(&self, exercise: &Exercise) -> StoreResult<PathBuf> {
        let course = self.course_of(exercise).await?;
        let mut path = PathBuf::from(course.path);
        path.extend(exercise.path_segments());
        Ok(path)
    }

    /// Records whether the exercise directory exists right now.
    pub async fn sync_downloaded_status(&self, exercise: &mut Exercise) -> StoreResult<bool> {
        let path = self.resolve_path(exercise).await?;
        let is_downloaded = self.probe.is_dir(&path).await?;

        let updated = sqlx::query("UPDATE exercise SET is_downloaded = ?1 WHERE id = ?2")
            .bind(is_downloaded)
            .bind(exercise.id)
            .execute(&self.db)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        exercise.is_downloaded = is_downloaded;
        debug!("{} downloaded={} ({})", exercise, is_downloaded, path.display());
        Ok(is_downloaded)
    }

    pub fn display_name(&self, exercise: &Exercise) -> String {
        exercise.display_name()
    }
}
