use crate::redundancy::domain::RedundancyReport;
use crate::shared::error::ExitCode;

/// CheckResponse - Response DTO from the redundancy check use case
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub report: RedundancyReport,
    /// Filters that matched no dependency key anywhere in the tree
    pub unmatched_filters: Vec<String>,
}

impl CheckResponse {
    pub fn new(report: RedundancyReport, unmatched_filters: Vec<String>) -> Self {
        Self {
            report,
            unmatched_filters,
        }
    }

    /// Exit code for a completed check
    pub fn exit_code(&self) -> ExitCode {
        if self.report.is_clean() {
            ExitCode::Clean
        } else {
            ExitCode::RedundanciesFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redundancy::domain::{ReportLine, ReportMetadata, ReportRow};

    fn report(lines: Vec<ReportLine>) -> RedundancyReport {
        RedundancyReport {
            project_name: "my-app".to_string(),
            groups: vec![],
            lines,
            metadata: ReportMetadata::new(String::new(), String::new(), String::new()),
        }
    }

    #[test]
    fn test_exit_code_clean() {
        let response = CheckResponse::new(report(vec![]), vec![]);
        assert_eq!(response.exit_code(), ExitCode::Clean);
    }

    #[test]
    fn test_exit_code_redundancies_found() {
        let row = ReportRow {
            package_name: "lodash".to_string(),
            version: "2.0.0".to_string(),
            suggest_version: "3.0.0".to_string(),
            location: "foo@1.0.0".to_string(),
            project_name: "my-app".to_string(),
        };
        let response = CheckResponse::new(
            report(vec![ReportLine::Row(row), ReportLine::Separator]),
            vec![],
        );
        assert_eq!(response.exit_code(), ExitCode::RedundanciesFound);
    }
}
