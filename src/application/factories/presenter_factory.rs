use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::adapters::outbound::graphviz::GraphvizPresenter;
use crate::application::dto::GraphOutputFormat;
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
    /// Graph output file; DOT is written as-is, other formats go through Graphviz
    Graph(PathBuf, GraphOutputFormat),
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use apt_depgraph::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
            PresenterType::Graph(path, format) => match format.graphviz_format() {
                Some(graphviz_format) => Box::new(GraphvizPresenter::new(path, graphviz_format)),
                None => Box::new(FileSystemWriter::new(path)),
            },
        }
    }
}
