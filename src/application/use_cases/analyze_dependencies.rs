use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::dependency_analysis::domain::{Catalog, DependencyGraph, PackageCatalog};
use crate::dependency_analysis::services::{
    GraphBuilder, LoadOrderPlanner, MetadataParser, PackageFilter, ReportGenerator,
};
use crate::ports::outbound::{MetadataSource, ProgressReporter};
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use tracing::{debug, warn};

/// AnalyzeDependenciesUseCase - Core use case of the tool
///
/// Fetches the repository index, builds the dependency closure of one package
/// and plans its load order. Infrastructure is injected generically.
///
/// # Type Parameters
/// * `MS` - MetadataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<MS, PR> {
    metadata_source: MS,
    progress_reporter: PR,
}

impl<MS, PR> AnalyzeDependenciesUseCase<MS, PR>
where
    MS: MetadataSource,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(metadata_source: MS, progress_reporter: PR) -> Self {
        Self {
            metadata_source,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns an error if:
    /// - The repository index cannot be fetched or decoded
    /// - The requested package is not in the index
    /// - The filter substring is invalid
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Fetch and parse the repository index
        let catalog = self.load_catalog().await?;

        // Step 2: The root must be a known package
        let root = request.package_name.as_str();
        if !catalog.exists(root) {
            return Err(DepGraphError::PackageNotFound {
                name: root.to_string(),
            }
            .into());
        }

        // Step 3: Build the dependency graph
        let filter = PackageFilter::new(&request.filter_substring)?;
        let graph = self.build_graph(&catalog, root, &filter)?;

        // Step 4: Plan the load order
        let load_order = LoadOrderPlanner::plan(&graph, root);
        let unresolved = LoadOrderPlanner::unresolved(&graph, &load_order);
        if !unresolved.is_empty() {
            debug!(count = unresolved.len(), "packages left out of the load order");
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} package(s), {} edge(s), {} cycle(s)",
            graph.total_package_count(),
            graph.total_edge_count(),
            graph.cycles().len()
        ));

        Ok(AnalysisResponse::new(
            graph,
            load_order,
            unresolved,
            request.filter_substring,
            catalog.len(),
            ReportGenerator::generate_default_metadata(),
        ))
    }

    /// Fetches the index and parses it into a catalog, reporting progress
    async fn load_catalog(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📥 Loading repository metadata from: {}",
            self.metadata_source.describe()
        ));

        let metadata = self.metadata_source.fetch_metadata().await?;
        debug!(bytes = metadata.len(), "repository metadata loaded");

        let catalog = MetadataParser::parse(&metadata);
        self.progress_reporter
            .report(&format!("✅ Parsed {} package(s)", catalog.len()));

        Ok(catalog)
    }

    /// Builds the graph and reports filter and cycle findings
    fn build_graph(
        &self,
        catalog: &Catalog,
        root: &str,
        filter: &PackageFilter,
    ) -> Result<DependencyGraph> {
        self.progress_reporter
            .report(&format!("🔍 Resolving dependencies of '{}'...", root));

        let graph = GraphBuilder::build(catalog, root, filter)?;

        if filter.is_active() && graph.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: The package '{}' itself matches the filter '{}'. The graph is empty.",
                root,
                filter.substring()
            ));
        } else if filter.is_active() && !filter.was_matched() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not match any dependencies.",
                filter.substring()
            ));
        }

        for cycle in graph.cycles() {
            warn!(cycle = %cycle, "circular dependency");
            self.progress_reporter
                .report_error(&format!("🔁 Circular dependency: {}", cycle));
        }

        Ok(graph)
    }
}
