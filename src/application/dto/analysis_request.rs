use crate::dependency_analysis::domain::PackageName;

/// AnalysisRequest - Internal request DTO for the dependency analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Package whose dependency closure is analyzed
    pub package_name: PackageName,
    /// Substring excluding matching package names (empty = no filtering)
    pub filter_substring: String,
}

impl AnalysisRequest {
    pub fn new(package_name: PackageName, filter_substring: impl Into<String>) -> Self {
        Self {
            package_name,
            filter_substring: filter_substring.into(),
        }
    }
}
