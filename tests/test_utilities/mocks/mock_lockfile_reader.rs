use async_trait::async_trait;
use dep_slim::prelude::*;
use dep_slim::shared::error::DepSlimError;
use std::path::Path;

/// Mock LockfileReader for testing
///
/// Parses an in-memory JSON document, or fails like a missing file would.
pub struct MockLockfileReader {
    content: Option<String>,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// A reader that reports the lock file as missing
    pub fn missing() -> Self {
        Self { content: None }
    }
}

#[async_trait]
impl LockfileReader for MockLockfileReader {
    async fn read_lockfile(&self, project_path: &Path) -> Result<PackageLock> {
        let path = project_path.join("package-lock.json");
        let content = self.content.as_deref().ok_or_else(|| DepSlimError::LockfileNotFound {
            path: path.clone(),
            suggestion: "mock lock file is missing".to_string(),
        })?;

        serde_json::from_str(content).map_err(|e| {
            DepSlimError::LockfileParseError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
