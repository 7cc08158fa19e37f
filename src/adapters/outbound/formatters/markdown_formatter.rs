use super::{ADVICE_STEPS, ADVICE_TITLE, COLUMN_HEADERS, SUCCESS_MESSAGE};
use crate::ports::outbound::ReportFormatter;
use crate::redundancy::domain::{RedundancyReport, ReportLine};
use crate::shared::Result;

/// MarkdownFormatter adapter for reports meant for pull requests or wikis
///
/// Separators between groups are dropped; Markdown tables have no
/// notion of an empty row.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, report: &RedundancyReport) {
        output.push_str("# Package Redundancy Report\n\n");
        if !report.project_name.is_empty() {
            output.push_str(&format!(
                "Project: `{}`\n\n",
                Self::escape_markdown_table_cell(&report.project_name)
            ));
        }
    }

    fn render_table(&self, output: &mut String, report: &RedundancyReport) {
        output.push_str(&format!("| {} |\n", COLUMN_HEADERS.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            COLUMN_HEADERS
                .iter()
                .map(|h| format!("{}|", "-".repeat(h.len() + 2)))
                .collect::<String>()
        ));

        for line in &report.lines {
            if let ReportLine::Row(row) = line {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&row.package_name),
                    Self::escape_markdown_table_cell(&row.version_transition()),
                    Self::escape_markdown_table_cell(&row.location),
                    Self::escape_markdown_table_cell(&row.project_name),
                ));
            }
        }
        output.push('\n');
    }

    fn render_advice(&self, output: &mut String) {
        output.push_str(&format!("## {}\n\n", ADVICE_TITLE));
        for (i, step) in ADVICE_STEPS.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &RedundancyReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);

        if report.is_clean() {
            output.push_str(SUCCESS_MESSAGE);
            output.push('\n');
            return Ok(output);
        }

        self.render_table(&mut output, report);
        self.render_advice(&mut output);
        Ok(output)
    }
}
