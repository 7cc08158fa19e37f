use indexmap::IndexMap;
use serde::Serialize;

/// An installed or required version together with the version it should move to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSuggestion {
    pub version: String,
    pub suggest_version: String,
}

impl VersionSuggestion {
    pub fn new(version: impl Into<String>, suggest_version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            suggest_version: suggest_version.into(),
        }
    }

    /// "old -> new"
    pub fn transition(&self) -> String {
        format!("{} -> {}", self.version, self.suggest_version)
    }
}

/// Result of the second tree walk
///
/// `redundant_dependencies` holds nested packages installed below the best
/// version seen in the tree (at the root: every top-level package).
/// `require_redundant_dependencies` holds entries of this node's `requires`
/// that lag the best version seen. Both are `None` when nothing qualifies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedundancyNode {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redundant_dependencies: Option<IndexMap<String, RedundancyNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_redundant_dependencies: Option<IndexMap<String, VersionSuggestion>>,
}

impl RedundancyNode {
    /// True when neither redundant map is present
    pub fn is_settled(&self) -> bool {
        self.redundant_dependencies.is_none() && self.require_redundant_dependencies.is_none()
    }
}
