mod dep_filter;
mod latest_version_index_builder;
mod redundancy_analyzer;
mod report_builder;
mod tree_simplifier;
pub mod version;

pub use dep_filter::DepFilter;
pub use latest_version_index_builder::LatestVersionIndexBuilder;
pub use redundancy_analyzer::RedundancyAnalyzer;
pub use report_builder::ReportBuilder;
pub use tree_simplifier::TreeSimplifier;
