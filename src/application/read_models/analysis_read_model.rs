//! Analysis read model for query operations
//!
//! Aggregates everything the report formatters need in a sorted,
//! denormalized shape.

use crate::dependency_analysis::domain::GraphStatistics;
use serde::Serialize;

/// Main read model for one dependency analysis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReadModel {
    pub metadata: ReportMetadataView,
    /// Package the analysis started from
    pub root: String,
    /// Applied filter substring, `None` when filtering was disabled
    pub filter: Option<String>,
    /// Packages in the parsed repository index
    pub catalog_size: usize,
    pub statistics: GraphStatistics,
    /// Every graph node, sorted by name
    pub packages: Vec<PackageView>,
    pub load_order: Vec<String>,
    pub unresolved: Vec<String>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// View representation of one graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    pub name: String,
    /// Direct dependencies, sorted; empty for leaves
    pub dependencies: Vec<String>,
    pub is_root: bool,
    /// Member of at least one recorded cycle
    pub in_cycle: bool,
    /// 1-based position in the load order, `None` when unresolved
    pub load_position: Option<usize>,
}

impl AnalysisReadModel {
    pub fn has_cycles(&self) -> bool {
        self.statistics.cycles_found > 0
    }

    /// Whether `from -> to` is an edge walked by a recorded cycle
    pub fn is_cycle_edge(&self, from: &str, to: &str) -> bool {
        self.statistics
            .cycles
            .iter()
            .any(|cycle| cycle.windows(2).any(|pair| pair[0] == from && pair[1] == to))
    }
}
