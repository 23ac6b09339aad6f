use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cableflow_application::SessionBlobStore;
use cableflow_core::{AppError, AppResult};
use tokio::fs;

/// Session blob store keeping one JSON file per key inside a directory.
///
/// Writes go to a temporary sibling file that is renamed into place.
#[derive(Debug, Clone)]
pub struct FileSessionBlobStore {
    directory: PathBuf,
}

impl FileSessionBlobStore {
    /// Creates a store rooted at `directory`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.directory.as_path()
    }

    fn blob_path(&self, key: &str) -> AppResult<PathBuf> {
        let is_safe_key = !key.is_empty()
            && key
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || matches!(character, '_' | '-'));
        if !is_safe_key {
            return Err(AppError::Validation(format!(
                "session storage key '{key}' is not a plain file name"
            )));
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

#[async_trait]
impl SessionBlobStore for FileSessionBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.blob_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(storage_error("read", &path, &error)),
        }
    }

    async fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        let path = self.blob_path(key)?;
        let temporary_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.directory)
            .await
            .map_err(|error| storage_error("create", &self.directory, &error))?;
        fs::write(&temporary_path, blob)
            .await
            .map_err(|error| storage_error("write", &temporary_path, &error))?;
        fs::rename(&temporary_path, &path)
            .await
            .map_err(|error| storage_error("replace", &path, &error))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.blob_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(storage_error("remove", &path, &error)),
        }
    }
}

fn storage_error(action: &str, path: &Path, error: &std::io::Error) -> AppError {
    AppError::PersistenceUnavailable(format!(
        "failed to {action} session storage at '{}': {error}",
        path.display()
    ))
}
