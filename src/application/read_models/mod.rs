//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod analysis_read_model;
pub mod analysis_read_model_builder;

pub use analysis_read_model::{AnalysisReadModel, PackageView, ReportMetadataView};
pub use analysis_read_model_builder::AnalysisReadModelBuilder;
