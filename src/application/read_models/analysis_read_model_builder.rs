//! Builder for constructing AnalysisReadModel from domain objects

use super::analysis_read_model::{AnalysisReadModel, PackageView, ReportMetadataView};
use crate::application::dto::AnalysisResponse;
use crate::dependency_analysis::domain::{DependencyGraph, ReportMetadata};
use std::collections::{BTreeSet, HashMap};

/// Builder for constructing AnalysisReadModel from an analysis response
pub struct AnalysisReadModelBuilder;

impl AnalysisReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Result of the dependency analysis use case
    pub fn build(response: &AnalysisResponse) -> AnalysisReadModel {
        let filter = if response.filter_substring.is_empty() {
            None
        } else {
            Some(response.filter_substring.clone())
        };

        AnalysisReadModel {
            metadata: Self::build_metadata(&response.metadata),
            root: response.graph.root().to_string(),
            filter,
            catalog_size: response.catalog_size,
            statistics: response.graph.statistics(),
            packages: Self::build_packages(&response.graph, &response.load_order),
            load_order: response.load_order.clone(),
            unresolved: response.unresolved.clone(),
        }
    }

    /// Converts domain metadata to view representation
    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    /// One view per graph node, in name order
    fn build_packages(graph: &DependencyGraph, load_order: &[String]) -> Vec<PackageView> {
        let positions: HashMap<&str, usize> = load_order
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index + 1))
            .collect();

        let cycle_members: BTreeSet<&str> = graph
            .cycles()
            .iter()
            .flat_map(|cycle| cycle.members().iter().map(String::as_str))
            .collect();

        graph
            .all_packages()
            .into_iter()
            .map(|name| PackageView {
                name: name.to_string(),
                dependencies: graph
                    .dependencies_of(name)
                    .map(|deps| deps.iter().cloned().collect())
                    .unwrap_or_default(),
                is_root: name == graph.root(),
                in_cycle: cycle_members.contains(name),
                load_position: positions.get(name).copied(),
            })
            .collect()
    }
}
