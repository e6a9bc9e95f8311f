use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;

use crate::error::StoreResult;

/// The only filesystem question the store asks.
#[async_trait]
pub trait DirectoryProbe: Send + Sync {
    async fn is_dir(&self, path: &Path) -> StoreResult<bool>;
}

pub struct LocalDirectoryProbe;

#[async_trait]
impl DirectoryProbe for LocalDirectoryProbe {
    async fn is_dir(&self, path: &Path) -> StoreResult<bool> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_probe() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").expect("Failed to write file");

        let probe = LocalDirectoryProbe;
        assert!(probe.is_dir(dir.path()).await.unwrap());
        assert!(!probe.is_dir(&file).await.unwrap());
        assert!(!probe.is_dir(&dir.path().join("missing")).await.unwrap());
        assert!(!probe.is_dir(&file.join("below-a-file")).await.unwrap());
    }
}
