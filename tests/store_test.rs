use std::path::PathBuf;

use tmc::models::{NewCourse, NewExercise};
use tmc::services::{DownloadSyncService, DownloadSyncStats};
use tmc::{Store, StoreConfig, StoreError};

#[tokio::test]
async fn test_open_creates_parent_directory_and_persists() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = StoreConfig::new(dir.path().join(".config").join("tmc.db"));

    {
        let store = Store::open(&config).await.expect("Failed to open store");
        store.config().set("url", "https://tmc.example.org").await.unwrap();
        let mut course = store
            .courses()
            .upsert(NewCourse {
                tid: 1,
                name: "ohpe".to_string(),
                path: "/home/u/ohpe".to_string(),
            })
            .await
            .unwrap();
        store.courses().select(&mut course).await.unwrap();
        store.pool().close().await;
    }

    assert!(config.database_path.exists());

    // Opening again reuses the file and does not clobber existing tables.
    let store = Store::open(&config).await.expect("Failed to reopen store");
    let again = Store::open(&config).await.expect("Failed to open a second handle");
    assert_eq!(
        store.config().get("url").await.unwrap(),
        "https://tmc.example.org"
    );
    assert_eq!(again.courses().get_selected().await.unwrap().tid, 1);
}

#[tokio::test]
async fn test_reset_empties_all_tables() {
    let store = Store::open_in_memory().await.expect("Failed to open store");

    store.config().set("url", "x").await.unwrap();
    let mut course = store
        .courses()
        .upsert(NewCourse {
            tid: 1,
            name: "c".to_string(),
            path: String::new(),
        })
        .await
        .unwrap();
    store.courses().select(&mut course).await.unwrap();
    let mut exercise = store
        .exercises()
        .upsert(NewExercise {
            tid: 2,
            name: "a-b".to_string(),
            course_id: course.id,
            is_completed: false,
            is_attempted: false,
            deadline: None,
        })
        .await
        .unwrap();
    store.exercises().select(&mut exercise).await.unwrap();

    store.reset().await.expect("Failed to reset");

    assert!(!store.config().has_remote_configured().await.unwrap());
    assert!(store.courses().list().await.unwrap().is_empty());
    assert!(matches!(
        store.courses().get_selected().await,
        Err(StoreError::NoCourseSelected)
    ));
    assert!(matches!(
        store.exercises().get_selected().await,
        Err(StoreError::NoExerciseSelected)
    ));
    assert!(matches!(
        store.exercises().find_by_external_id(2).await,
        Err(StoreError::NotFound)
    ));

    // Usable straight away.
    store.config().set("url", "y").await.unwrap();
    assert_eq!(store.config().get("url").await.unwrap(), "y");
}

#[tokio::test]
async fn test_download_sync_against_real_directories() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let course_path = root.path().join("ohpe");
    std::fs::create_dir_all(course_path.join("week1").join("Week1_001.Hello"))
        .expect("Failed to create exercise dir");

    let store = Store::open_in_memory().await.expect("Failed to open store");
    let course = store
        .courses()
        .upsert(NewCourse {
            tid: 1,
            name: "ohpe".to_string(),
            path: course_path.to_string_lossy().into_owned(),
        })
        .await
        .unwrap();

    for (tid, name) in [(10, "week1-Week1_001.Hello"), (11, "week1-Week1_002.Bye")] {
        store
            .exercises()
            .upsert(NewExercise {
                tid,
                name: name.to_string(),
                course_id: course.id,
                is_completed: false,
                is_attempted: false,
                deadline: None,
            })
            .await
            .unwrap();
    }

    let service = DownloadSyncService::new(store.exercises());
    let stats = service.sync_course(&course).await.expect("Failed to sync");
    assert_eq!(
        stats,
        DownloadSyncStats {
            checked: 2,
            downloaded: 1,
            missing: 1,
        }
    );

    let hello = store.exercises().find_by_external_id(10).await.unwrap();
    assert!(hello.is_downloaded);
    assert_eq!(
        store.exercises().resolve_path(&hello).await.unwrap(),
        PathBuf::from(&course_path).join("week1").join("Week1_001.Hello")
    );
    assert!(!store.exercises().find_by_external_id(11).await.unwrap().is_downloaded);
}
