mod dependency_expression;
mod graph_builder;
mod load_order;
mod metadata_parser;
mod package_filter;
mod report_generator;

pub use dependency_expression::DependencyExpressionParser;
pub use graph_builder::GraphBuilder;
pub use load_order::LoadOrderPlanner;
pub use metadata_parser::MetadataParser;
pub use package_filter::PackageFilter;
pub use report_generator::ReportGenerator;
