use super::DepFilter;
use crate::redundancy::domain::{RawTreeNode, SimplifiedNode};

/// TreeSimplifier - Reduces the lock file tree to version, dependencies and requires
///
/// Pure function over the raw tree; the input is left untouched.
pub struct TreeSimplifier;

impl TreeSimplifier {
    /// Builds the simplified tree
    ///
    /// Dependencies are kept only when their key passes `filter`; `requires`
    /// is copied as-is. Absent maps stay absent.
    pub fn simplify(node: &RawTreeNode, filter: &DepFilter) -> SimplifiedNode {
        SimplifiedNode {
            version: node.version.clone(),
            dependencies: node.dependencies.as_ref().map(|deps| {
                filter
                    .filtered(deps)
                    .map(|(name, child)| (name.clone(), Self::simplify(child, filter)))
                    .collect()
            }),
            requires: node.requires.clone(),
        }
    }
}
