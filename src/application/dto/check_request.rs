use std::path::PathBuf;

/// CheckRequest - Request DTO for the redundancy check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Project directory containing package.json and package-lock.json
    pub project_path: PathBuf,
    /// Substring filters restricting which dependency keys are analyzed
    pub dep_filters: Vec<String>,
}

impl CheckRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            dep_filters: Vec::new(),
        }
    }

    pub fn with_dep_filters(mut self, dep_filters: Vec<String>) -> Self {
        self.dep_filters = dep_filters;
        self
    }
}
