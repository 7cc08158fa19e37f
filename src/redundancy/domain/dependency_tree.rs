use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Flat `name -> version` constraints declared by a single package
pub type RequiresMap = IndexMap<String, String>;

/// A node of the installed tree as written in package-lock.json
///
/// Only the fields the redundancy check needs are deserialized; `resolved`,
/// `integrity`, `dev` and friends are ignored. The package name is the key
/// under which the node appears in its parent's `dependencies`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTreeNode {
    #[serde(default)]
    pub version: String,
    /// The lock file root stores `"requires": true` here; only a map is kept.
    #[serde(default, deserialize_with = "deserialize_requires")]
    pub requires: Option<RequiresMap>,
    #[serde(default)]
    pub dependencies: Option<IndexMap<String, RawTreeNode>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequiresField {
    Map(RequiresMap),
    #[allow(dead_code)]
    Flag(bool),
}

fn deserialize_requires<'de, D>(deserializer: D) -> std::result::Result<Option<RequiresMap>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RequiresField>::deserialize(deserializer)? {
        Some(RequiresField::Map(map)) => Some(map),
        Some(RequiresField::Flag(_)) | None => None,
    })
}

/// package-lock.json: the root tree node plus the project name
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageLock {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub root: RawTreeNode,
}

/// A lock file node reduced to what the analysis reads
///
/// `dependencies` only contains entries accepted by the dep filter.
/// Absent maps stay `None` rather than becoming empty maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimplifiedNode {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, SimplifiedNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<RequiresMap>,
}

impl SimplifiedNode {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            dependencies: None,
            requires: None,
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>, node: SimplifiedNode) -> Self {
        self.dependencies
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), node);
        self
    }

    pub fn with_require(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.requires
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), version.into());
        self
    }

    /// Iterates over child nodes, empty when `dependencies` is absent
    pub fn children(&self) -> impl Iterator<Item = (&String, &SimplifiedNode)> {
        self.dependencies.iter().flat_map(|deps| deps.iter())
    }
}
