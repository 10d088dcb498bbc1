use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Name of the Graphviz layout executable looked up on `PATH`
const DEFAULT_DOT_EXECUTABLE: &str = "dot";

/// GraphvizPresenter adapter rendering DOT markup into an image or PDF
///
/// Pipes the markup into `dot -T<format> -o <file>`.
pub struct GraphvizPresenter {
    output_path: PathBuf,
    format: &'static str,
    executable: PathBuf,
}

impl GraphvizPresenter {
    /// # Arguments
    /// * `output_path` - File to create
    /// * `format` - Graphviz output format (`svg`, `png`, `pdf`)
    pub fn new(output_path: PathBuf, format: &'static str) -> Self {
        Self {
            output_path,
            format,
            executable: PathBuf::from(DEFAULT_DOT_EXECUTABLE),
        }
    }

    /// Uses a specific `dot` binary instead of the one on `PATH`
    pub fn with_executable(mut self, executable: impl AsRef<Path>) -> Self {
        self.executable = executable.as_ref().to_path_buf();
        self
    }

    fn render_error(&self, details: String, hint: &str) -> DepGraphError {
        DepGraphError::RenderError {
            path: self.output_path.clone(),
            details,
            hint: hint.to_string(),
        }
    }
}

impl OutputPresenter for GraphvizPresenter {
    fn present(&self, content: &str) -> Result<()> {
        debug!(
            executable = %self.executable.display(),
            format = self.format,
            output = %self.output_path.display(),
            "rendering graph"
        );

        let mut child = Command::new(&self.executable)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(&self.output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    self.render_error(
                        format!("'{}' was not found", self.executable.display()),
                        "Install Graphviz, or use a .dot output file to skip rendering",
                    )
                } else {
                    self.render_error(e.to_string(), "Check that Graphviz is installed correctly")
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(content.as_bytes()).map_err(|e| {
                self.render_error(
                    format!("Failed to send graph to Graphviz: {}", e),
                    "Check that Graphviz is installed correctly",
                )
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            self.render_error(e.to_string(), "Check that Graphviz is installed correctly")
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .render_error(
                    format!("Graphviz exited with {}: {}", output.status, stderr.trim()),
                    "Verify that the output directory exists and is writable",
                )
                .into());
        }

        eprintln!("✅ Graph rendered: {}", self.output_path.display());
        Ok(())
    }
}
