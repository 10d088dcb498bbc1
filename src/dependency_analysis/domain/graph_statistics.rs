use serde::Serialize;

/// Summary numbers of a built dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    /// Distinct packages appearing as a key or a dependency
    pub total_packages: usize,
    /// Sum of per-package out-degrees
    pub total_edges: usize,
    pub cycles_found: usize,
    pub cycles: Vec<Vec<String>>,
}
