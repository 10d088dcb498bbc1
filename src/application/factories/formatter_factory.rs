use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, MarkdownFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Formatter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Analysis report written to stdout
    Report(ReportFormat),
    /// Graphviz markup for the graph output file
    Dot,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use apt_depgraph::application::dto::ReportFormat;
    /// use apt_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Report(ReportFormat::Json));
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Report(ReportFormat::Markdown) => Box::new(MarkdownFormatter::new()),
            FormatterType::Report(ReportFormat::Json) => Box::new(JsonFormatter::new()),
            FormatterType::Dot => Box::new(DotFormatter::new()),
        }
    }

    /// Returns the progress message for the specified formatter type
    ///
    /// # Examples
    /// ```
    /// use apt_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::Dot);
    /// assert_eq!(message, "📝 Generating Graphviz DOT graph...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Report(ReportFormat::Markdown) => "📝 Generating Markdown report...",
            FormatterType::Report(ReportFormat::Json) => "📝 Generating JSON report...",
            FormatterType::Dot => "📝 Generating Graphviz DOT graph...",
        }
    }
}
