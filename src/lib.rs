//! apt-depgraph - dependency analysis for Debian package repositories
//!
//! This library reads a Debian `Packages` index, builds the transitive
//! dependency graph of one package, detects circular dependencies through
//! it and plans a dependencies-first load order. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Catalog, graph builder, load order planner
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): Config file loading and settings validation
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use apt_depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let metadata_source = FileSystemMetadataSource::new(PathBuf::from("Packages"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeDependenciesUseCase::new(metadata_source, progress_reporter);
//!
//! // Execute
//! let request = AnalysisRequest::new(PackageName::new("bash".to_string())?, "");
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = AnalysisReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemMetadataSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DotFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::graphviz::GraphvizPresenter;
    pub use crate::adapters::outbound::network::HttpMetadataSource;
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, GraphOutputFormat, ReportFormat,
    };
    pub use crate::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::config::{AnalysisSettings, ConfigFile, SettingsOverrides};
    pub use crate::dependency_analysis::domain::{
        Catalog, Cycle, DependencyGraph, GraphStatistics, PackageCatalog, PackageName,
    };
    pub use crate::dependency_analysis::services::{
        DependencyExpressionParser, GraphBuilder, LoadOrderPlanner, MetadataParser,
        PackageFilter,
    };
    pub use crate::ports::outbound::{
        MetadataSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
