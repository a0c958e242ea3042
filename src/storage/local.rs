//! Local filesystem storage implementation.
//!
//! Writes the club document as pretty-printed JSON. The write goes to a
//! sibling temp file first and is renamed over the target, so a failed run
//! never leaves a half-written document behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::ClubRecord;
use crate::storage::{ClubStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Create a LocalStorage writing to the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Sibling temp file: the full target name plus `.tmp`.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Write bytes atomically (write to temp, then rename).
    ///
    /// The temp file is removed again when any step after its creation fails.
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.tmp_path();
        let file = tokio::fs::File::create(&tmp).await?;
        if let Err(e) = Self::replace_with(file, bytes, &tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn replace_with(
        mut file: tokio::fs::File,
        bytes: &[u8],
        tmp: &Path,
        target: &Path,
    ) -> std::io::Result<()> {
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);
        tokio::fs::rename(tmp, target).await
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(&bytes).await
    }

    /// Read JSON data, returning None if the file doesn't exist.
    async fn read_json<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl ClubStorage for LocalStorage {
    async fn write_clubs(&self, clubs: &[ClubRecord]) -> Result<WriteMetadata> {
        self.write_json(clubs)
            .await
            .map_err(|e| AppError::write(self.location(), e))?;

        log::debug!("{} records written to {}", clubs.len(), self.location());

        Ok(WriteMetadata {
            club_count: clubs.len(),
            location: self.location(),
            timestamp: Utc::now(),
        })
    }

    async fn load_clubs(&self) -> Result<Option<Vec<ClubRecord>>> {
        self.read_json().await
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BasicInfo, DetailOutcome, DetailRecord};
    use tempfile::TempDir;

    fn sample_clubs() -> Vec<ClubRecord> {
        let mut with_details = ClubRecord::new(BasicInfo {
            name: Some("ರಂಗ Theatre".to_string()),
            link: Some("https://clubs.pes.edu/club/ranga/".to_string()),
            image: None,
        });
        with_details.detailed_info = Some(DetailOutcome::Details(DetailRecord {
            title: Some("Ranga".to_string()),
            ..DetailRecord::default()
        }));

        let mut failed = ClubRecord::new(BasicInfo {
            name: Some("Chess".to_string()),
            link: Some("https://clubs.pes.edu/club/chess/".to_string()),
            image: None,
        });
        failed.detailed_info = Some(DetailOutcome::Failed {
            error: "timed out".to_string(),
        });

        vec![with_details, failed, ClubRecord::new(BasicInfo::default())]
    }

    #[tokio::test]
    async fn test_write_and_load() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("clubs_data.json"));
        let clubs = sample_clubs();

        let meta = storage.write_clubs(&clubs).await.unwrap();
        assert_eq!(meta.club_count, 3);

        let loaded = storage.load_clubs().await.unwrap().unwrap();
        assert_eq!(loaded, clubs);
    }

    #[tokio::test]
    async fn test_output_is_indented_and_keeps_unicode() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("clubs_data.json"));
        storage.write_clubs(&sample_clubs()).await.unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"basic_info\""));
        assert!(text.contains("ರಂಗ Theatre"));
        assert!(!tmp.path().join("clubs_data.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_document() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("out").join("clubs.json"));

        storage.write_clubs(&sample_clubs()).await.unwrap();
        storage.write_clubs(&[]).await.unwrap();

        let loaded = storage.load_clubs().await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("nope.json"));
        assert!(storage.load_clubs().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_write_error() {
        let tmp = TempDir::new().unwrap();
        // A directory sits where the file should go.
        let target = tmp.path().join("taken");
        std::fs::create_dir(&target).unwrap();
        std::fs::create_dir(target.with_extension("tmp")).unwrap();

        let storage = LocalStorage::new(&target);
        let err = storage.write_clubs(&sample_clubs()).await.unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let tmp = TempDir::new().unwrap();
        // Temp file is created, the rename onto a non-empty directory fails.
        let target = tmp.path().join("clubs_data.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let storage = LocalStorage::new(&target);
        let err = storage.write_clubs(&sample_clubs()).await.unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
        assert!(!tmp.path().join("clubs_data.json.tmp").exists());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_temp_file_does_not_clobber_sibling() {
        let tmp = TempDir::new().unwrap();
        let sibling = tmp.path().join("clubs_data.tmp");
        std::fs::write(&sibling, b"keep me").unwrap();

        let storage = LocalStorage::new(tmp.path().join("clubs_data.json"));
        storage.write_clubs(&sample_clubs()).await.unwrap();

        assert_eq!(std::fs::read(&sibling).unwrap(), b"keep me");
    }
}
