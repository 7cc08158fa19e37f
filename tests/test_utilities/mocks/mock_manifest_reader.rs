use async_trait::async_trait;
use dep_slim::prelude::*;
use dep_slim::shared::error::DepSlimError;
use std::path::Path;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    content: Option<String>,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Manifest with the given direct dependencies, all at "*"
    pub fn with_dependencies(name: &str, dependencies: &[&str]) -> Self {
        let deps: serde_json::Map<String, serde_json::Value> = dependencies
            .iter()
            .map(|d| (d.to_string(), serde_json::Value::String("*".to_string())))
            .collect();
        Self::new(serde_json::json!({ "name": name, "dependencies": deps }).to_string())
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

#[async_trait]
impl ManifestReader for MockManifestReader {
    async fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let path = project_path.join("package.json");
        let content = self.content.as_deref().ok_or_else(|| DepSlimError::ManifestNotFound {
            path: path.clone(),
            suggestion: "mock manifest is missing".to_string(),
        })?;

        serde_json::from_str(content).map_err(|e| {
            DepSlimError::ManifestParseError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
