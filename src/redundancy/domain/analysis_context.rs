use indexmap::IndexSet;

/// Values every stage of one check shares
///
/// Replaces process-wide state: the project name comes from the lock file,
/// the direct dependencies from the manifest (after the dep filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    project_name: String,
    direct_dependencies: IndexSet<String>,
}

impl AnalysisContext {
    pub fn new<I, S>(project_name: impl Into<String>, direct_dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            project_name: project_name.into(),
            direct_dependencies: direct_dependencies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn is_direct_dependency(&self, name: &str) -> bool {
        self.direct_dependencies.contains(name)
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.direct_dependencies.len()
    }
}
