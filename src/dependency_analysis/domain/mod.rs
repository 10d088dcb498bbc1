pub mod catalog;
pub mod cycle;
pub mod dependency_graph;
pub mod graph_statistics;
pub mod package;
pub mod report_metadata;

pub use catalog::{Catalog, PackageCatalog, PackageRecord};
pub use cycle::Cycle;
pub use dependency_graph::DependencyGraph;
pub use graph_statistics::GraphStatistics;
pub use package::PackageName;
pub use report_metadata::ReportMetadata;
