use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Find npm packages installed in more than one version and suggest how to deduplicate them
#[derive(Parser, Debug)]
#[command(name = "dep-slim")]
#[command(version)]
#[command(
    about = "Find redundant package versions in an npm project's package-lock.json",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format: table, markdown or json [default: table]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only analyze dependencies whose name contains SUBSTRING
    /// Can be specified multiple times: -F "@acme/" -F "lodash"
    #[arg(short = 'F', long = "filter", value_name = "SUBSTRING")]
    pub filters: Vec<String>,

    /// Lock file name inside the project directory [default: package-lock.json]
    #[arg(long, value_name = "FILE")]
    pub lockfile: Option<String>,

    /// Manifest file name inside the project directory [default: package.json]
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<String>,

    /// Config file path (defaults to dep-slim.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
