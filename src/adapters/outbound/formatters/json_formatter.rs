use crate::ports::outbound::ReportFormatter;
use crate::redundancy::domain::{RedundancyReport, ReportRow};
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo<'a>,
    generated_at: &'a str,
    project: &'a str,
    clean: bool,
    redundancies: Vec<&'a ReportRow>,
}

/// JsonFormatter adapter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RedundancyReport) -> Result<String> {
        let document = JsonReport {
            tool: ToolInfo {
                name: report.metadata.tool_name(),
                version: report.metadata.tool_version(),
            },
            generated_at: report.metadata.timestamp(),
            project: &report.project_name,
            clean: report.is_clean(),
            redundancies: report.rows().collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redundancy::domain::{ReportLine, ReportMetadata};
    use serde_json::Value;

    fn report(lines: Vec<ReportLine>) -> RedundancyReport {
        RedundancyReport {
            project_name: "my-app".to_string(),
            groups: vec![],
            lines,
            metadata: ReportMetadata::new(
                "2024-01-01T00:00:00Z".to_string(),
                "dep-slim".to_string(),
                "0.3.0".to_string(),
            ),
        }
    }

    #[test]
    fn test_json_clean_report() {
        let output = JsonFormatter::new().format(&report(vec![])).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["tool"]["name"], "dep-slim");
        assert_eq!(value["tool"]["version"], "0.3.0");
        assert_eq!(value["generated_at"], "2024-01-01T00:00:00Z");
        assert_eq!(value["project"], "my-app");
        assert_eq!(value["clean"], true);
        assert_eq!(value["redundancies"], Value::Array(vec![]));
    }

    #[test]
    fn test_json_rows_use_camel_case() {
        let output = JsonFormatter::new()
            .format(&report(vec![
                ReportLine::Row(ReportRow {
                    package_name: "lodash".to_string(),
                    version: "2.0.0".to_string(),
                    suggest_version: "3.0.0".to_string(),
                    location: "foo@1.0.0".to_string(),
                    project_name: "my-app".to_string(),
                }),
                ReportLine::Separator,
            ]))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["clean"], false);
        let rows = value["redundancies"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["packageName"], "lodash");
        assert_eq!(rows[0]["suggestVersion"], "3.0.0");
        assert_eq!(rows[0]["location"], "foo@1.0.0");
        assert_eq!(rows[0]["projectName"], "my-app");
    }
}
