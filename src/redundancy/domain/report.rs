use super::VersionSuggestion;
use indexmap::IndexMap;
use serde::Serialize;

/// A top-level package that carries packages needing an update
///
/// `need_update` merges stale `requires` entries with stale nested installs;
/// the nested install wins when both name the same package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedundancyGroup {
    pub name: String,
    pub version: String,
    pub need_update: IndexMap<String, VersionSuggestion>,
}

impl RedundancyGroup {
    /// "name@version", the Location column
    pub fn location(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub package_name: String,
    pub version: String,
    pub suggest_version: String,
    pub location: String,
    pub project_name: String,
}

impl ReportRow {
    /// "old -> new", the Suggestion column
    pub fn version_transition(&self) -> String {
        format!("{} -> {}", self.version, self.suggest_version)
    }
}

/// Flattened report content; a separator closes every group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Row(ReportRow),
    Separator,
}

/// Tool information stamped on machine-readable output
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

/// Final outcome of a redundancy check
#[derive(Debug, Clone)]
pub struct RedundancyReport {
    pub project_name: String,
    pub groups: Vec<RedundancyGroup>,
    pub lines: Vec<ReportLine>,
    pub metadata: ReportMetadata,
}

impl RedundancyReport {
    /// Data rows, without separators
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Row(row) => Some(row),
            ReportLine::Separator => None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    /// True when there is nothing to deduplicate
    pub fn is_clean(&self) -> bool {
        self.row_count() == 0
    }
}
