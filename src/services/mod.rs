pub mod download_sync;

pub use download_sync::{DownloadSyncService, DownloadSyncStats};
