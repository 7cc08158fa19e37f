use crate::redundancy::domain::PackageLock;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// LockfileReader port for loading the installed dependency tree
///
/// This port abstracts where package-lock.json comes from. Implementations
/// return the parsed tree; a lock file that cannot be parsed is an error.
#[async_trait]
pub trait LockfileReader: Send + Sync {
    /// Reads and parses the lock file of the given project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing the lock file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lock file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid JSON
    async fn read_lockfile(&self, project_path: &Path) -> Result<PackageLock>;
}
