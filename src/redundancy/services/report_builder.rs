use crate::redundancy::domain::{
    AnalysisContext, LatestVersionIndex, RedundancyGroup, RedundancyNode, RedundancyReport,
    ReportLine, ReportMetadata, ReportRow, VersionSuggestion,
};
use chrono::Utc;
use indexmap::IndexMap;

/// ReportBuilder - Turns the analyzer tree into report rows
///
/// Runs in two passes: `merge` prunes top-level packages and merges their
/// two kinds of findings, `flatten` produces one row per finding.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the complete report
    pub fn build(
        tree: &RedundancyNode,
        index: &LatestVersionIndex,
        context: &AnalysisContext,
    ) -> RedundancyReport {
        let groups = Self::merge(tree, index, context);
        let lines = Self::flatten(&groups, context.project_name());

        RedundancyReport {
            project_name: context.project_name().to_string(),
            groups,
            lines,
            metadata: Self::generate_default_metadata(),
        }
    }

    /// Prune & merge pass
    ///
    /// Top-level packages without findings are dropped. For the others, stale
    /// `requires` entries are merged with stale nested installs (the install
    /// wins on a name collision, suggesting the indexed version). Only findings
    /// about direct dependencies of the project are kept.
    pub fn merge(
        tree: &RedundancyNode,
        index: &LatestVersionIndex,
        context: &AnalysisContext,
    ) -> Vec<RedundancyGroup> {
        let Some(top_level) = tree.redundant_dependencies.as_ref() else {
            return Vec::new();
        };

        top_level
            .iter()
            .filter(|(_, node)| !node.is_settled())
            .filter_map(|(name, node)| {
                let mut need_update: IndexMap<String, VersionSuggestion> = node
                    .require_redundant_dependencies
                    .clone()
                    .unwrap_or_default();

                for (dep_name, dep) in node.redundant_dependencies.iter().flatten() {
                    let suggest = index.get(dep_name).unwrap_or(&dep.version);
                    need_update.insert(
                        dep_name.clone(),
                        VersionSuggestion::new(dep.version.clone(), suggest),
                    );
                }

                need_update.retain(|dep_name, _| context.is_direct_dependency(dep_name));

                (!need_update.is_empty()).then(|| RedundancyGroup {
                    name: name.clone(),
                    version: node.version.clone(),
                    need_update,
                })
            })
            .collect()
    }

    /// Flatten pass: one row per finding, a separator after every group
    pub fn flatten(groups: &[RedundancyGroup], project_name: &str) -> Vec<ReportLine> {
        let mut lines = Vec::new();

        for group in groups {
            let location = group.location();
            for (package_name, suggestion) in &group.need_update {
                lines.push(ReportLine::Row(ReportRow {
                    package_name: package_name.clone(),
                    version: suggestion.version.clone(),
                    suggest_version: suggestion.suggest_version.clone(),
                    location: location.clone(),
                    project_name: project_name.to_string(),
                }));
            }
            lines.push(ReportLine::Separator);
        }

        lines
    }

    /// Report metadata with the current timestamp and this tool's name and version
    pub fn generate_default_metadata() -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}
