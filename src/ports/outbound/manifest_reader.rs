use crate::redundancy::domain::ProjectManifest;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ManifestReader port for loading the project manifest (package.json)
#[async_trait]
pub trait ManifestReader: Send + Sync {
    /// Reads and parses the manifest of the given project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The file cannot be read
    /// - The content is not valid JSON
    async fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest>;
}
