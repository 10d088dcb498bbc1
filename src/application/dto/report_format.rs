use std::path::Path;

/// Report format enumeration for the analysis summary written to stdout
///
/// Both the CLI (inbound adapter) and the formatters (outbound adapters)
/// need to understand it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable Markdown (default)
    #[default]
    Markdown,
    /// Machine-readable JSON
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// File format of the rendered dependency graph, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphOutputFormat {
    /// Graphviz source, written as-is
    Dot,
    Svg,
    Png,
    Pdf,
}

impl GraphOutputFormat {
    /// Extensions accepted for the graph output file (lowercase, no dot)
    pub const SUPPORTED_EXTENSIONS: [&'static str; 4] = ["svg", "png", "pdf", "dot"];

    /// Detects the format from the extension of `path` (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "dot" => Some(GraphOutputFormat::Dot),
            "svg" => Some(GraphOutputFormat::Svg),
            "png" => Some(GraphOutputFormat::Png),
            "pdf" => Some(GraphOutputFormat::Pdf),
            _ => None,
        }
    }

    /// Argument for `dot -T<format>`; `None` when no rendering is needed
    pub fn graphviz_format(self) -> Option<&'static str> {
        match self {
            GraphOutputFormat::Dot => None,
            GraphOutputFormat::Svg => Some("svg"),
            GraphOutputFormat::Png => Some("png"),
            GraphOutputFormat::Pdf => Some("pdf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("json").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
        assert_eq!(
            ReportFormat::from_str("markdown").unwrap(),
            ReportFormat::Markdown
        );
        assert_eq!(ReportFormat::from_str("MD").unwrap(), ReportFormat::Markdown);
    }

    #[test]
    fn test_report_format_from_str_invalid() {
        let error = ReportFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(ReportFormat::from_str("").is_err());
    }

    #[test]
    fn test_report_format_display_and_default() {
        assert_eq!(ReportFormat::Json.to_string(), "json");
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
        assert_eq!(ReportFormat::default(), ReportFormat::Markdown);
    }

    #[test]
    fn test_graph_output_format_from_path() {
        assert_eq!(
            GraphOutputFormat::from_path(Path::new("out/graph.svg")),
            Some(GraphOutputFormat::Svg)
        );
        assert_eq!(
            GraphOutputFormat::from_path(Path::new("graph.PNG")),
            Some(GraphOutputFormat::Png)
        );
        assert_eq!(
            GraphOutputFormat::from_path(Path::new("graph.pdf")),
            Some(GraphOutputFormat::Pdf)
        );
        assert_eq!(
            GraphOutputFormat::from_path(Path::new("graph.dot")),
            Some(GraphOutputFormat::Dot)
        );
    }

    #[test]
    fn test_graph_output_format_rejects_other_extensions() {
        assert_eq!(GraphOutputFormat::from_path(Path::new("graph.txt")), None);
        assert_eq!(GraphOutputFormat::from_path(Path::new("graph")), None);
        assert_eq!(GraphOutputFormat::from_path(Path::new(".svg")), None);
    }

    #[test]
    fn test_graphviz_format() {
        assert_eq!(GraphOutputFormat::Dot.graphviz_format(), None);
        assert_eq!(GraphOutputFormat::Svg.graphviz_format(), Some("svg"));
        assert_eq!(GraphOutputFormat::Pdf.graphviz_format(), Some("pdf"));
    }
}
