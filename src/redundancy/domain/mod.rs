pub mod analysis_context;
pub mod dependency_tree;
pub mod latest_version_index;
pub mod manifest;
pub mod redundancy_tree;
pub mod report;

pub use analysis_context::AnalysisContext;
pub use dependency_tree::{PackageLock, RawTreeNode, RequiresMap, SimplifiedNode};
pub use latest_version_index::LatestVersionIndex;
pub use manifest::ProjectManifest;
pub use redundancy_tree::{RedundancyNode, VersionSuggestion};
pub use report::{RedundancyGroup, RedundancyReport, ReportLine, ReportMetadata, ReportRow};
