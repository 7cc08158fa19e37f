/// Formatter adapters for the different report output formats
mod json_formatter;
mod markdown_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use table_formatter::TableFormatter;

/// Printed instead of a table when nothing needs deduplication
pub const SUCCESS_MESSAGE: &str = "Congratulations! Your project has no redundant package!";

/// Column headers shared by the table and Markdown renderings
pub const COLUMN_HEADERS: [&str; 4] = ["Redundant-Package", "Suggestion", "Location", "Project"];

pub const ADVICE_TITLE: &str = "What to do now?";

pub const ADVICE_STEPS: [&str; 3] = [
    "Follow Suggestions to solve redundancy and install redundancy-solved version",
    "Use npm dedupe to optimize dependency tree",
    "Run me again",
];
