use crate::application::read_models::{AnalysisReadModel, PackageView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Dependencies | Load Position | In Cycle |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|--------------|---------------|----------|\n";

/// MarkdownFormatter adapter for a human-readable analysis report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
        if count == 1 {
            singular
        } else {
            plural
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str(&format!(
            "# Dependency Analysis: {}\n\n",
            Self::escape_markdown_table_cell(&model.root)
        ));
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, model: &AnalysisReadModel) {
        let stats = &model.statistics;
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Repository index: {} {}\n",
            model.catalog_size,
            Self::plural(model.catalog_size, "package", "packages")
        ));
        match &model.filter {
            Some(filter) => output.push_str(&format!("- Filter: `{}`\n", filter)),
            None => output.push_str("- Filter: none\n"),
        }
        output.push_str(&format!("- Packages in graph: {}\n", stats.total_packages));
        output.push_str(&format!("- Dependency edges: {}\n", stats.total_edges));
        output.push_str(&format!("- Cycles found: {}\n\n", stats.cycles_found));
    }

    fn render_packages(&self, output: &mut String, packages: &[PackageView]) {
        output.push_str("## Packages\n\n");
        if packages.is_empty() {
            output.push_str("*No packages in the graph*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for package in packages {
            let name = if package.is_root {
                format!("**{}**", Self::escape_markdown_table_cell(&package.name))
            } else {
                Self::escape_markdown_table_cell(&package.name)
            };
            let dependencies = if package.dependencies.is_empty() {
                "-".to_string()
            } else {
                Self::escape_markdown_table_cell(&package.dependencies.join(", "))
            };
            let position = package
                .load_position
                .map(|p| p.to_string())
                .unwrap_or_else(|| "unresolved".to_string());
            let in_cycle = if package.in_cycle { "yes" } else { "no" };

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                name, dependencies, position, in_cycle
            ));
        }
        output.push('\n');
    }

    fn render_cycles(&self, output: &mut String, cycles: &[Vec<String>]) {
        output.push_str("## Circular Dependencies\n\n");
        if cycles.is_empty() {
            output.push_str("*No circular dependencies found*\n\n");
            return;
        }
        for cycle in cycles {
            output.push_str(&format!("- {}\n", cycle.join(" → ")));
        }
        output.push('\n');
    }

    fn render_load_order(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str("## Load Order\n\n");
        if model.load_order.is_empty() {
            output.push_str("*Nothing to load*\n\n");
            return;
        }
        for (index, package) in model.load_order.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, package));
        }
        output.push('\n');

        if !model.unresolved.is_empty() {
            output.push_str(&format!(
                "⚠️ {} {} could not be ordered because of circular dependencies: {}\n\n",
                model.unresolved.len(),
                Self::plural(model.unresolved.len(), "package", "packages"),
                model.unresolved.join(", ")
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &AnalysisReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, model);
        self.render_packages(&mut output, &model.packages);
        self.render_cycles(&mut output, &model.statistics.cycles);
        self.render_load_order(&mut output, model);

        Ok(output)
    }
}
