use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Course, NewCourse};

pub struct CourseRepository {
    db: SqlitePool,
}

impl CourseRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Registers a course by its remote id, or refreshes the stored name.
    /// An empty `path` keeps whatever path is already stored.
    pub async fn upsert(&self, req: NewCourse) -> StoreResult<Course> {
        sqlx::query(
            r#"
            INSERT INTO course (tid, name, path)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(tid) DO UPDATE SET
                name = excluded.name,
                path = CASE WHEN excluded.path = '' THEN course.path ELSE excluded.path END
            "#,
        )
        .bind(req.tid)
        .bind(&req.name)
        .bind(&req.path)
        .execute(&self.db)
        .await?;

        debug!("upserted course tid={}", req.tid);
        self.find_by_external_id(req.tid).await
    }

    pub async fn get(&self, id: i64) -> StoreResult<Course> {
        sqlx::query_as::<_, Course>(
            "SELECT id, tid, name, is_selected, path FROM course WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn find_by_external_id(&self, tid: i64) -> StoreResult<Course> {
        sqlx::query_as::<_, Course>(
            "SELECT id, tid, name, is_selected, path FROM course WHERE tid = ?",
        )
        .bind(tid)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn list(&self) -> StoreResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, tid, name, is_selected, path FROM course ORDER BY tid",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(courses)
    }

    /// Persists name and path. The selection flag only moves through
    /// [`CourseRepository::select`].
    pub async fn save(&self, course: &Course) -> StoreResult<()> {
        let updated = sqlx::query(
            "UPDATE course SET name = ?1, path = ?2 WHERE id = ?3",
        )
        .bind(&course.name)
        .bind(&course.path)
        .bind(course.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Makes `course` the only selected course and persists it.
    pub async fn select(&self, course: &mut Course) -> StoreResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("UPDATE course SET is_selected = 0 WHERE is_selected = 1")
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query("UPDATE course SET is_selected = 1 WHERE id = ?")
            .bind(course.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            // dropping tx rolls back the clear
            return Err(StoreError::NotFound);
        }
        tx.commit().await?;

        course.is_selected = true;
        debug!("selected {}", course);
        Ok(())
    }

    pub async fn get_selected(&self) -> StoreResult<Course> {
        sqlx::query_as::<_, Course>(
            "SELECT id, tid, name, is_selected, path FROM course WHERE is_selected = 1 ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NoCourseSelected)
    }

    pub fn display_name<'a>(&self, course: &'a Course) -> &'a str {
        course.display_name()
    }
}
