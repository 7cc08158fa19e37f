use crate::application::dto::{CheckRequest, CheckResponse};
use crate::ports::outbound::{LockfileReader, ManifestReader, ProgressReporter};
use crate::redundancy::domain::{AnalysisContext, PackageLock, ProjectManifest};
use crate::redundancy::services::{
    DepFilter, LatestVersionIndexBuilder, RedundancyAnalyzer, ReportBuilder, TreeSimplifier,
};
use crate::shared::Result;

/// Number of analysis stages reported through the progress bar
const STAGE_COUNT: usize = 4;

/// CheckRedundancyUseCase - Core use case for the redundancy check
///
/// This use case orchestrates the check using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckRedundancyUseCase<LR, MR, PR> {
    lockfile_reader: LR,
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<LR, MR, PR> CheckRedundancyUseCase<LR, MR, PR>
where
    LR: LockfileReader,
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new CheckRedundancyUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes the redundancy check
    ///
    /// Both inputs are loaded before any analysis starts; if either
    /// fails, the error is returned and no report is produced.
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Step 1: Validate filters before touching the file system
        let filter = DepFilter::new(request.dep_filters.clone())?;

        // Step 2: Load both inputs concurrently
        let (lock, manifest) = self.read_inputs(&request).await?;

        // Step 3: Resolve the project context
        let context = Self::build_context(&lock, &manifest, &filter);
        self.progress_reporter.report(&format!(
            "✅ Project {} has {} direct dependenc{}",
            display_name(context.project_name()),
            context.direct_dependency_count(),
            if context.direct_dependency_count() == 1 { "y" } else { "ies" }
        ));

        // Step 4: Run the analysis pipeline
        self.progress_reporter
            .report_progress(1, STAGE_COUNT, Some("Simplifying dependency tree"));
        let simplified = TreeSimplifier::simplify(&lock.root, &filter);

        self.progress_reporter
            .report_progress(2, STAGE_COUNT, Some("Indexing latest versions"));
        let index = LatestVersionIndexBuilder::build(&simplified);

        self.progress_reporter
            .report_progress(3, STAGE_COUNT, Some("Analyzing redundancy"));
        let tree = RedundancyAnalyzer::analyze(&simplified, &index);

        self.progress_reporter
            .report_progress(4, STAGE_COUNT, Some("Building report"));
        let report = ReportBuilder::build(&tree, &index, &context);

        // Step 5: Warn about filters that never matched
        let unmatched_filters = filter.unmatched_filters();
        for pattern in &unmatched_filters {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not match any dependency.",
                pattern
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "🔍 Check complete: {} redundant package(s) found across {} package(s)",
            report.row_count(),
            index.len()
        ));

        Ok(CheckResponse::new(report, unmatched_filters))
    }

    /// Reads the lock file and the manifest concurrently
    async fn read_inputs(&self, request: &CheckRequest) -> Result<(PackageLock, ProjectManifest)> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json and package-lock.json from: {}",
            request.project_path.display()
        ));

        tokio::try_join!(
            self.lockfile_reader.read_lockfile(&request.project_path),
            self.manifest_reader.read_manifest(&request.project_path),
        )
    }

    /// Direct dependencies are the manifest's dependency names that pass the filter
    fn build_context(
        lock: &PackageLock,
        manifest: &ProjectManifest,
        filter: &DepFilter,
    ) -> AnalysisContext {
        AnalysisContext::new(
            lock.name.clone(),
            manifest.dependency_names().filter(|name| filter.allows(name)),
        )
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
