use super::{ADVICE_STEPS, ADVICE_TITLE, COLUMN_HEADERS, SUCCESS_MESSAGE};
use crate::ports::outbound::ReportFormatter;
use crate::redundancy::domain::{RedundancyReport, ReportLine, ReportRow};
use crate::shared::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

/// TableFormatter adapter for the default console output
///
/// Renders one row per redundant package with a blank row closing each
/// group, followed by advice on how to resolve the findings.
pub struct TableFormatter {
    color: bool,
}

impl TableFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header_cell(&self, text: &str) -> Cell {
        let cell = Cell::new(text);
        if self.color {
            cell.fg(Color::Yellow).add_attribute(Attribute::Underlined)
        } else {
            cell
        }
    }

    fn colored_cell(&self, text: String, color: Color) -> Cell {
        let cell = Cell::new(text);
        if self.color {
            cell.fg(color)
        } else {
            cell
        }
    }

    fn suggestion_cell(&self, row: &ReportRow) -> Cell {
        if !self.color {
            return Cell::new(row.version_transition());
        }
        Cell::new(format!(
            "{} -> {}",
            row.version.red(),
            row.suggest_version.green()
        ))
    }

    fn render_table(&self, report: &RedundancyReport) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_header(
            COLUMN_HEADERS
                .iter()
                .map(|h| self.header_cell(h))
                .collect::<Vec<_>>(),
        );

        for line in &report.lines {
            match line {
                ReportLine::Row(row) => {
                    table.add_row(vec![
                        self.colored_cell(row.package_name.clone(), Color::Red),
                        self.suggestion_cell(row),
                        self.colored_cell(row.location.clone(), Color::Grey),
                        Cell::new(&row.project_name),
                    ]);
                }
                ReportLine::Separator => {
                    table.add_row(vec![""; COLUMN_HEADERS.len()]);
                }
            }
        }

        table.to_string()
    }

    fn render_advice(&self, output: &mut String) {
        let mut advice = String::from(ADVICE_TITLE);
        for (i, step) in ADVICE_STEPS.iter().enumerate() {
            advice.push_str(&format!("\n{}. {}", i + 1, step));
        }

        if self.color {
            output.push_str(&advice.yellow().to_string());
        } else {
            output.push_str(&advice);
        }
        output.push('\n');
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &RedundancyReport) -> Result<String> {
        if report.is_clean() {
            let line = if self.color {
                SUCCESS_MESSAGE.green().to_string()
            } else {
                SUCCESS_MESSAGE.to_string()
            };
            return Ok(format!("{}\n", line));
        }

        let mut output = self.render_table(report);
        output.push_str("\n\n");
        self.render_advice(&mut output);
        Ok(output)
    }
}
