//! dep-slim - Redundant package finder for npm projects
//!
//! This library reads a project's `package.json` and `package-lock.json`,
//! finds packages installed in more than one version, and suggests the
//! version each stale copy should move to so `npm dedupe` can collapse them.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`redundancy`): Dependency trees, the version comparator
//!   and the analysis pipeline, with no I/O
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console and formatter implementations
//! - **Shared** (`shared`): Error types, exit codes and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use dep_slim::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let use_case = CheckRedundancyUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CheckRequest::new(PathBuf::from("."));
//! let response = use_case.execute(request).await?;
//!
//! let output = TableFormatter::new(false).format(&response.report)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod redundancy;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::application::dto::{CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::use_cases::CheckRedundancyUseCase;
    pub use crate::ports::outbound::{
        LockfileReader, ManifestReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::redundancy::domain::{
        AnalysisContext, LatestVersionIndex, PackageLock, ProjectManifest, RedundancyReport,
        ReportRow, SimplifiedNode,
    };
    pub use crate::redundancy::services::{
        DepFilter, LatestVersionIndexBuilder, RedundancyAnalyzer, ReportBuilder, TreeSimplifier,
    };
    pub use crate::shared::Result;
}
