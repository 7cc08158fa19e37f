use crate::ports::outbound::{LockfileReader, ManifestReader};
use crate::redundancy::domain::{PackageLock, ProjectManifest};
use crate::shared::error::DepSlimError;
use crate::shared::security::validate_input_metadata;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Default lock file name
pub const DEFAULT_LOCKFILE_NAME: &str = "package-lock.json";

/// Default manifest file name
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// FileSystemReader adapter for reading project files from disk
///
/// This adapter implements both LockfileReader and ManifestReader ports.
/// File names are relative to the project directory passed to each call.
#[derive(Debug, Clone)]
pub struct FileSystemReader {
    lockfile_name: String,
    manifest_name: String,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            lockfile_name: DEFAULT_LOCKFILE_NAME.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }

    /// Uses custom file names instead of package-lock.json / package.json
    pub fn with_file_names(lockfile_name: impl Into<String>, manifest_name: impl Into<String>) -> Self {
        Self {
            lockfile_name: lockfile_name.into(),
            manifest_name: manifest_name.into(),
        }
    }

    pub fn lockfile_name(&self) -> &str {
        &self.lockfile_name
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Safely read a file:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    async fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .await
            .map_err(|e| DepSlimError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        validate_input_metadata(&metadata, path)?;

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DepSlimError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found_suggestion(file_name: &str, project_path: &Path) -> String {
    format!(
        "{} does not exist in project directory \"{}\".\n   \
         Please run in the root directory of an npm project, or specify the correct path with the --path option.",
        file_name,
        project_path.display()
    )
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[async_trait]
impl LockfileReader for FileSystemReader {
    async fn read_lockfile(&self, project_path: &Path) -> Result<PackageLock> {
        let lockfile_path = project_path.join(&self.lockfile_name);

        if !exists(&lockfile_path).await {
            return Err(DepSlimError::LockfileNotFound {
                suggestion: not_found_suggestion(&self.lockfile_name, project_path),
                path: lockfile_path,
            }
            .into());
        }

        let content = self.safe_read_file(&lockfile_path).await?;

        serde_json::from_str(&content).map_err(|e| {
            DepSlimError::LockfileParseError {
                path: lockfile_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl ManifestReader for FileSystemReader {
    async fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let manifest_path = project_path.join(&self.manifest_name);

        if !exists(&manifest_path).await {
            return Err(DepSlimError::ManifestNotFound {
                suggestion: not_found_suggestion(&self.manifest_name, project_path),
                path: manifest_path,
            }
            .into());
        }

        let content = self.safe_read_file(&manifest_path).await?;

        serde_json::from_str(&content).map_err(|e| {
            DepSlimError::ManifestParseError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
