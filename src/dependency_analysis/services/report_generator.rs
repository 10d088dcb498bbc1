use crate::dependency_analysis::domain::ReportMetadata;
use chrono::Utc;

/// ReportGenerator service for stamping analysis reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current timestamp
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        ReportMetadata::new(timestamp, tool_name.to_string(), tool_version.to_string())
    }

    /// Generates report metadata for this binary (compile-time version)
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("apt-depgraph", env!("CARGO_PKG_VERSION"))
    }
}
