use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a cyclic dependency closure apart
/// from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis finished (cycles are only reported)
    Success = 0,
    /// Cycles were found and `--fail-on-cycles` was given
    CyclesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, network, file I/O, rendering, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CyclesDetected => write!(f, "Cycles Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency analysis.
///
/// `PackageNotFound` is also the typed error of catalog lookups; the graph
/// builder matches on it to treat unknown packages as leaves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DepGraphError {
    #[error("Package not found in repository metadata: {name}\n\n💡 Hint: Check the package name spelling and that the repository index covers it")]
    PackageNotFound { name: String },

    #[error("Invalid configuration: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig { reason: String, hint: String },

    #[error("Repository metadata file not found: {path}\n\n💡 Hint: Please verify the test repository path, or disable test mode to download the index")]
    MetadataNotFound { path: PathBuf },

    #[error("Failed to fetch repository metadata from {url}\nDetails: {details}\n\n💡 Hint: Please verify the repository URL and your network connection")]
    MetadataFetchError { url: String, details: String },

    #[error("Failed to decode repository metadata from {source_name}\nDetails: {details}\n\n💡 Hint: Only plain text and gzip-compressed (.gz) indexes are supported")]
    MetadataDecodeError { source_name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render graph to {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    RenderError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns and user input
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CyclesDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::CyclesDetected),
            "Cycles Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_package_not_found_display() {
        let error = DepGraphError::PackageNotFound {
            name: "libfoo".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package not found"));
        assert!(display.contains("libfoo"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = DepGraphError::InvalidConfig {
            reason: "Field 'package_name' cannot be empty".to_string(),
            hint: "Set package_name".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("package_name"));
        assert!(display.contains("Set package_name"));
    }

    #[test]
    fn test_metadata_fetch_error_display() {
        let error = DepGraphError::MetadataFetchError {
            url: "http://deb.example.org/Packages".to_string(),
            details: "status code 404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("http://deb.example.org/Packages"));
        assert!(display.contains("status code 404"));
    }

    #[test]
    fn test_render_error_display() {
        let error = DepGraphError::RenderError {
            path: PathBuf::from("/tmp/graph.svg"),
            details: "dot not found".to_string(),
            hint: "Install Graphviz".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/tmp/graph.svg"));
        assert!(display.contains("Install Graphviz"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DepGraphError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_package_not_found_equality() {
        let a = DepGraphError::PackageNotFound {
            name: "a".to_string(),
        };
        assert_eq!(
            a,
            DepGraphError::PackageNotFound {
                name: "a".to_string()
            }
        );
    }
}
