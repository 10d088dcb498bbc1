use crate::dependency_analysis::domain::{DependencyGraph, ReportMetadata};

/// AnalysisResponse - Internal response DTO from the dependency analysis use case
///
/// Carries the rich domain results; adapters format them through the read model.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Dependency closure of the requested package
    pub graph: DependencyGraph,
    /// Dependencies-first order, root last
    pub load_order: Vec<String>,
    /// Graph nodes left out of the load order because of a cycle
    pub unresolved: Vec<String>,
    /// Filter substring that was applied (empty = none)
    pub filter_substring: String,
    /// Number of packages in the parsed repository index
    pub catalog_size: usize,
    pub metadata: ReportMetadata,
}

impl AnalysisResponse {
    pub fn new(
        graph: DependencyGraph,
        load_order: Vec<String>,
        unresolved: Vec<String>,
        filter_substring: String,
        catalog_size: usize,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            graph,
            load_order,
            unresolved,
            filter_substring,
            catalog_size,
            metadata,
        }
    }

    /// Whether the analysis found at least one dependency cycle
    pub fn has_cycles(&self) -> bool {
        self.graph.has_cycles()
    }
}
