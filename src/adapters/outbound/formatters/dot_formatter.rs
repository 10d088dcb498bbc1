use crate::application::read_models::AnalysisReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// DotFormatter adapter producing Graphviz `digraph` markup
///
/// Edges point from a package to its dependency. The root is filled, and
/// edges walked by a recorded cycle are drawn red.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes an identifier for DOT
    fn quote(id: &str) -> String {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for DotFormatter {
    fn format(&self, model: &AnalysisReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("digraph {} {{\n", Self::quote(&model.root)));
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=box, fontname=\"Helvetica\"];\n");

        for package in &model.packages {
            let mut attributes = Vec::new();
            if package.is_root {
                attributes.push("style=filled, fillcolor=lightblue");
            } else if package.in_cycle {
                attributes.push("color=red");
            }
            if attributes.is_empty() {
                output.push_str(&format!("    {};\n", Self::quote(&package.name)));
            } else {
                output.push_str(&format!(
                    "    {} [{}];\n",
                    Self::quote(&package.name),
                    attributes.join(", ")
                ));
            }
        }

        for package in &model.packages {
            for dependency in &package.dependencies {
                let style = if model.is_cycle_edge(&package.name, dependency) {
                    " [color=red]"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "    {} -> {}{};\n",
                    Self::quote(&package.name),
                    Self::quote(dependency),
                    style
                ));
            }
        }

        output.push_str("}\n");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{PackageView, ReportMetadataView};
    use crate::dependency_analysis::domain::GraphStatistics;

    fn view(name: &str, deps: &[&str], is_root: bool, in_cycle: bool) -> PackageView {
        PackageView {
            name: name.to_string(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            is_root,
            in_cycle,
            load_position: None,
        }
    }

    fn model(packages: Vec<PackageView>, cycles: Vec<Vec<String>>) -> AnalysisReadModel {
        AnalysisReadModel {
            metadata: ReportMetadataView {
                timestamp: String::new(),
                tool_name: "apt-depgraph".to_string(),
                tool_version: "0.1.0".to_string(),
            },
            root: "A".to_string(),
            filter: None,
            catalog_size: 0,
            statistics: GraphStatistics {
                total_packages: packages.len(),
                total_edges: 0,
                cycles_found: cycles.len(),
                cycles,
            },
            packages,
            load_order: vec![],
            unresolved: vec![],
        }
    }

    #[test]
    fn test_format_acyclic_graph() {
        let m = model(
            vec![view("A", &["B", "C"], true, false), view("B", &["C"], false, false), view("C", &[], false, false)],
            vec![],
        );
        let output = DotFormatter::new().format(&m).unwrap();

        assert!(output.starts_with("digraph \"A\" {\n"));
        assert!(output.contains("    \"A\" [style=filled, fillcolor=lightblue];\n"));
        assert!(output.contains("    \"C\";\n"));
        assert!(output.contains("    \"A\" -> \"B\";\n"));
        assert!(output.contains("    \"B\" -> \"C\";\n"));
        assert!(!output.contains("color=red"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_format_highlights_cycle_edges() {
        let m = model(
            vec![view("A", &["B", "D"], true, true), view("B", &["A"], false, true), view("D", &[], false, false)],
            vec![vec!["A".to_string(), "B".to_string(), "A".to_string()]],
        );
        let output = DotFormatter::new().format(&m).unwrap();

        assert!(output.contains("    \"A\" -> \"B\" [color=red];\n"));
        assert!(output.contains("    \"B\" -> \"A\" [color=red];\n"));
        assert!(output.contains("    \"A\" -> \"D\";\n"));
        assert!(output.contains("    \"B\" [color=red];\n"));
    }

    #[test]
    fn test_quote_escapes_special_characters() {
        assert_eq!(DotFormatter::quote("plain"), "\"plain\"");
        assert_eq!(DotFormatter::quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(DotFormatter::quote("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_format_empty_graph() {
        let output = DotFormatter::new().format(&model(vec![], vec![])).unwrap();
        assert!(!output.contains("->"));
        assert!(output.ends_with("}\n"));
    }
}
