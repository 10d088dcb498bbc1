use crate::application::read_models::AnalysisReadModel;
use crate::shared::Result;

/// ReportFormatter port for turning an analysis into text
///
/// Implemented for the Markdown and JSON reports and for Graphviz DOT markup.
pub trait ReportFormatter {
    /// Formats the analysis read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AnalysisReadModel) -> Result<String>;
}
