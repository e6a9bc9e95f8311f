use serde::Serialize;
use tracing::info;

use crate::db::ExerciseRepository;
use crate::error::StoreResult;
use crate::models::Course;

pub struct DownloadSyncService {
    exercises: ExerciseRepository,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct DownloadSyncStats {
    pub checked: usize,
    pub downloaded: usize,
    pub missing: usize,
}

impl DownloadSyncService {
    pub fn new(exercises: ExerciseRepository) -> Self {
        Self { exercises }
    }

    /// Refreshes the downloaded flag of every exercise in `course` from the
    /// filesystem.
    pub async fn sync_course(&self, course: &Course) -> StoreResult<DownloadSyncStats> {
        let mut stats = DownloadSyncStats::default();

        for mut exercise in self.exercises.list_for_course(course).await? {
            stats.checked += 1;
            if self.exercises.sync_downloaded_status(&mut exercise).await? {
                stats.downloaded += 1;
            } else {
                stats.missing += 1;
            }
        }

        info!(
            "Download sync for {} - checked: {}, downloaded: {}, missing: {}",
            course, stats.checked, stats.downloaded, stats.missing
        );
        Ok(stats)
    }
}
