use crate::redundancy::domain::RedundancyReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a redundancy report
///
/// Implementations render both outcomes: the table of redundant packages,
/// and the success message when the report is clean.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &RedundancyReport) -> Result<String>;
}
