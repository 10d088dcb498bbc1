//! Configuration file support for apt-depgraph.
//!
//! Settings come from a `config.json` (or YAML) file and from command-line
//! flags; flags win. The merged result is validated into [`AnalysisSettings`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::application::dto::{GraphOutputFormat, ReportFormat};
use crate::dependency_analysis::domain::PackageName;
use crate::dependency_analysis::services::PackageFilter;
use crate::shared::error::DepGraphError;
use crate::shared::security::{read_checked, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

/// File name looked up in the working directory when `--config` is not given
pub const CONFIG_FILENAME: &str = "config.json";

/// Top-level configuration file schema.
///
/// Every field is optional here; which ones are required depends on the
/// mode and on the command-line flags, and is checked after merging.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_mode: Option<bool>,
    pub test_repository_path: Option<String>,
    pub output_file: Option<String>,
    pub filter_substring: Option<String>,
    pub report_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_json::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// `.yml`/`.yaml` files are parsed as YAML, everything else as JSON.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if fs_entry_missing(path) {
        return Err(DepGraphError::InvalidConfig {
            reason: format!("Configuration file '{}' not found", path.display()),
            hint: format!(
                "Create {} in the working directory or pass --config <PATH>",
                CONFIG_FILENAME
            ),
        }
        .into());
    }

    let bytes = read_checked(path, "config file", MAX_CONFIG_FILE_SIZE)?;
    let content = String::from_utf8(bytes).with_context(|| {
        format!(
            "Config file is not valid UTF-8: {}\n\n💡 Hint: Save the file with UTF-8 encoding.",
            path.display()
        )
    })?;

    let config: ConfigFile = if is_yaml(path) {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    } else {
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid JSON and that each field has the right type.",
                path.display()
            )
        })?
    };

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover `config.json` in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if fs_entry_missing(&config_path) {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn fs_entry_missing(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_err()
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
        .unwrap_or(false)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; `None` leaves the config file value in place
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    /// Implies test mode
    pub test_repository_path: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub filter_substring: Option<String>,
    pub report_format: Option<ReportFormat>,
}

/// Fully resolved and validated run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub package_name: PackageName,
    pub repository_url: String,
    pub test_mode: bool,
    pub test_repository_path: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub filter_substring: String,
    pub report_format: ReportFormat,
}

impl AnalysisSettings {
    /// Merges the config file with command-line overrides and validates the result
    ///
    /// # Errors
    /// `DepGraphError::InvalidConfig` naming the offending field
    pub fn resolve(config: Option<ConfigFile>, overrides: SettingsOverrides) -> Result<Self> {
        let config = config.unwrap_or_default();

        let test_mode = overrides.test_repository_path.is_some() || config.test_mode.unwrap_or(false);

        let package_name = overrides.package_name.or(config.package_name);
        let repository_url = overrides.repository_url.or(config.repository_url);
        let test_repository_path = overrides
            .test_repository_path
            .or(config.test_repository_path.map(PathBuf::from));
        let output_file = overrides
            .output_file
            .or(config.output_file.map(PathBuf::from));
        let filter_substring = overrides
            .filter_substring
            .or(config.filter_substring)
            .unwrap_or_default();

        let report_format = match overrides.report_format {
            Some(format) => format,
            None => match config.report_format {
                Some(raw) => raw.parse::<ReportFormat>().map_err(|reason| {
                    invalid("report_format", &reason, "Use \"markdown\" or \"json\"")
                })?,
                None => ReportFormat::default(),
            },
        };

        let package_name = validate_package_name(package_name)?;
        let repository_url = validate_repository_url(repository_url, test_mode)?;
        let test_repository_path = validate_test_repository(test_repository_path, test_mode)?;
        let output_file = validate_output_file(output_file)?;
        validate_filter(&filter_substring)?;

        Ok(Self {
            package_name,
            repository_url,
            test_mode,
            test_repository_path,
            output_file,
            filter_substring,
            report_format,
        })
    }

    /// Parameter dump in `key: value` form, one line per setting
    pub fn render(&self) -> String {
        fn path_value(path: &Option<PathBuf>) -> String {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        }

        let entries = [
            ("package_name", self.package_name.to_string()),
            ("repository_url", self.repository_url.clone()),
            ("test_mode", self.test_mode.to_string()),
            ("test_repository_path", path_value(&self.test_repository_path)),
            ("output_file", path_value(&self.output_file)),
            ("filter_substring", self.filter_substring.clone()),
            ("report_format", self.report_format.to_string()),
        ];

        let mut output = String::from("=== Configuration parameters ===\n");
        for (key, value) in entries {
            let value = if value.is_empty() { "(empty)" } else { value.as_str() };
            let _ = writeln!(output, "{}: {}", key, value);
        }
        output.push_str(&"=".repeat(35));
        output.push('\n');
        output
    }
}

fn invalid(field: &str, reason: &str, hint: &str) -> anyhow::Error {
    DepGraphError::InvalidConfig {
        reason: format!("Field '{}' {}", field, reason),
        hint: hint.to_string(),
    }
    .into()
}

fn validate_package_name(value: Option<String>) -> Result<PackageName> {
    let value = value.ok_or_else(|| {
        invalid(
            "package_name",
            "is required",
            "Set package_name in the config file or pass --package <NAME>",
        )
    })?;
    if value.trim().is_empty() {
        return Err(invalid(
            "package_name",
            "cannot be empty",
            "Set package_name to the package to analyze, e.g. \"firefox\"",
        ));
    }
    PackageName::new(value).map_err(|e| {
        invalid(
            "package_name",
            &format!("is not a valid package name ({})", e),
            "Use a bare package name without version constraints or separators",
        )
    })
}

fn validate_repository_url(value: Option<String>, test_mode: bool) -> Result<String> {
    let value = value.unwrap_or_default();
    if test_mode {
        return Ok(value);
    }

    let url = value.trim();
    if url.is_empty() {
        return Err(invalid(
            "repository_url",
            "cannot be empty",
            "Set repository_url to a Packages or Packages.gz URL, or enable test_mode",
        ));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid(
            "repository_url",
            "must be a valid URL (starting with http:// or https://)",
            "e.g. http://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz",
        ));
    }
    Ok(url.to_string())
}

fn validate_test_repository(value: Option<PathBuf>, test_mode: bool) -> Result<Option<PathBuf>> {
    if !test_mode {
        return Ok(value);
    }

    let path = match value {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path,
        _ => {
            return Err(invalid(
                "test_repository_path",
                "cannot be empty when test mode is enabled",
                "Set test_repository_path or pass --test-repository <PATH>",
            ))
        }
    };

    if !path.exists() {
        return Err(invalid(
            "test_repository_path",
            &format!("points to '{}', which was not found", path.display()),
            "Check the path of the local Packages file",
        ));
    }
    if !path.is_file() {
        return Err(invalid(
            "test_repository_path",
            &format!("points to '{}', which is not a file", path.display()),
            "Point test_repository_path at a Packages file, not a directory",
        ));
    }
    Ok(Some(path))
}

fn validate_output_file(value: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = value else {
        return Ok(None);
    };

    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(invalid(
            "output_file",
            "cannot be empty",
            "Remove output_file or set it to e.g. \"graph.svg\"",
        ));
    }
    if GraphOutputFormat::from_path(&path).is_none() {
        return Err(invalid(
            "output_file",
            "must have a .svg, .png, .pdf or .dot extension",
            "e.g. \"graph.svg\"; .dot files are written without Graphviz",
        ));
    }
    Ok(Some(path))
}

fn validate_filter(value: &str) -> Result<()> {
    PackageFilter::new(value).map(|_| ()).map_err(|e| {
        invalid(
            "filter_substring",
            &format!("is invalid ({})", e),
            "Use a short plain-text substring",
        )
    })
}
