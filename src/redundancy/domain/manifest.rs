use indexmap::IndexMap;
use serde::Deserialize;

/// The parts of package.json the redundancy check reads
///
/// Only `dependencies` (what `npm install --save` writes) defines the direct
/// dependencies; dev and peer dependencies are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: Option<IndexMap<String, serde_json::Value>>,
}

impl ProjectManifest {
    /// Declared dependency names in manifest order
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .flat_map(|deps| deps.keys())
            .map(String::as_str)
    }
}
