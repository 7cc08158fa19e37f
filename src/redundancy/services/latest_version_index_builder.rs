use super::version::compare_dotted;
use crate::redundancy::domain::{LatestVersionIndex, SimplifiedNode};

/// LatestVersionIndexBuilder - First tree walk, collecting the highest version per package
///
/// The simplified tree is already filtered, so every node reached here counts.
pub struct LatestVersionIndexBuilder;

impl LatestVersionIndexBuilder {
    /// Builds the index for the whole tree
    ///
    /// The root itself is not indexed, only its descendants.
    pub fn build(root: &SimplifiedNode) -> LatestVersionIndex {
        let mut index = LatestVersionIndex::new();
        Self::visit(root, "", &mut index);
        index
    }

    /// Pre-order walk; an empty `name` marks the root
    fn visit(node: &SimplifiedNode, name: &str, index: &mut LatestVersionIndex) {
        if !name.is_empty() {
            let current = index.get(name).unwrap_or(&node.version);
            let higher = compare_dotted(current, &node.version).to_string();
            index.insert(name.to_string(), higher);
        }

        for (child_name, child) in node.children() {
            Self::visit(child, child_name, index);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const NAMES: [&str; 4] = ["a", "b", "c", "d"];

    /// Top-level version plus nested packages keyed by index into NAMES
    type Entry = (String, BTreeMap<usize, String>);

    fn version() -> impl Strategy<Value = String> {
        (0u8..5, 0u8..5, 0u8..5).prop_map(|(x, y, z)| format!("{}.{}.{}", x, y, z))
    }

    fn entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec(
            (
                version(),
                prop::collection::btree_map(0..NAMES.len(), version(), 0..4),
            ),
            0..6,
        )
    }

    fn build_tree(entries: &[Entry], reverse: bool) -> SimplifiedNode {
        let mut top: Vec<(String, SimplifiedNode)> = entries
            .iter()
            .enumerate()
            .map(|(i, (version, children))| {
                let mut children: Vec<_> = children.iter().collect();
                if reverse {
                    children.reverse();
                }
                let node = children
                    .into_iter()
                    .fold(SimplifiedNode::new(version.clone()), |node, (idx, v)| {
                        node.with_dependency(NAMES[*idx], SimplifiedNode::new(v.clone()))
                    });
                (format!("top{}", i), node)
            })
            .collect();
        if reverse {
            top.reverse();
        }

        top.into_iter()
            .fold(SimplifiedNode::new(""), |root, (key, node)| {
                root.with_dependency(key, node)
            })
    }

    proptest! {
        #[test]
        fn index_is_invariant_to_sibling_order(entries in entries()) {
            let forward = LatestVersionIndexBuilder::build(&build_tree(&entries, false));
            let backward = LatestVersionIndexBuilder::build(&build_tree(&entries, true));

            prop_assert_eq!(forward.len(), backward.len());
            for (name, version) in forward.iter() {
                prop_assert_eq!(Some(version), backward.get(name));
            }
        }

        #[test]
        fn index_holds_maximum_of_all_copies(entries in entries()) {
            let index = LatestVersionIndexBuilder::build(&build_tree(&entries, false));

            for (idx, name) in NAMES.iter().enumerate() {
                let expected = entries
                    .iter()
                    .filter_map(|(_, children)| children.get(&idx))
                    .fold(None::<String>, |acc, v| match acc {
                        None => Some(v.clone()),
                        Some(current) => Some(compare_dotted(&current, v).to_string()),
                    });
                prop_assert_eq!(index.get(name).map(str::to_string), expected);
            }
        }
    }
}
