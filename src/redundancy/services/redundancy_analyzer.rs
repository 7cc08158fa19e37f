use super::version::is_behind;
use crate::redundancy::domain::{
    LatestVersionIndex, RedundancyNode, SimplifiedNode, VersionSuggestion,
};
use indexmap::IndexMap;

/// RedundancyAnalyzer - Second tree walk, marking installs and requirements that lag behind
///
/// Contains no I/O and does not mutate its inputs.
pub struct RedundancyAnalyzer;

impl RedundancyAnalyzer {
    /// Analyzes the whole tree starting at the root
    ///
    /// Every top-level package is carried into the result so the report step
    /// can inspect it; nested packages only when they are behind.
    pub fn analyze(root: &SimplifiedNode, index: &LatestVersionIndex) -> RedundancyNode {
        Self::analyze_node(root, index, true)
    }

    /// Analyzes one node
    ///
    /// # Arguments
    /// * `node` - Node of the simplified tree
    /// * `index` - Highest version seen per package name
    /// * `is_top_level` - Include every child regardless of its version
    pub fn analyze_node(
        node: &SimplifiedNode,
        index: &LatestVersionIndex,
        is_top_level: bool,
    ) -> RedundancyNode {
        let stale_requires: IndexMap<String, VersionSuggestion> = node
            .requires
            .iter()
            .flat_map(|requires| requires.iter())
            .filter_map(|(name, required)| {
                let latest = index.get(name)?;
                is_behind(required, latest)
                    .then(|| (name.clone(), VersionSuggestion::new(required.clone(), latest)))
            })
            .collect();

        let redundant: IndexMap<String, RedundancyNode> = node
            .children()
            .filter(|(name, child)| {
                is_top_level
                    || index
                        .get(name)
                        .is_some_and(|latest| is_behind(&child.version, latest))
            })
            .map(|(name, child)| (name.clone(), Self::analyze_node(child, index, false)))
            .collect();

        RedundancyNode {
            version: node.version.clone(),
            redundant_dependencies: (!redundant.is_empty()).then_some(redundant),
            require_redundant_dependencies: (!stale_requires.is_empty()).then_some(stale_requires),
        }
    }
}
