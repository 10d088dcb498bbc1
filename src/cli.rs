use apt_depgraph::application::dto::ReportFormat;
use apt_depgraph::config::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Analyze the dependency graph of a package in a Debian repository
#[derive(Parser, Debug)]
#[command(name = "apt-depgraph")]
#[command(version)]
#[command(
    about = "Analyze the dependency graph of a package in a Debian repository",
    long_about = None
)]
pub struct Args {
    /// Configuration file (JSON or YAML). Defaults to ./config.json when present
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Package to analyze
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// URL of the Packages or Packages.gz index
    #[arg(short, long, value_name = "URL")]
    pub repository_url: Option<String>,

    /// Local Packages file; enables test mode
    #[arg(short, long, value_name = "PATH")]
    pub test_repository: Option<PathBuf>,

    /// Graph output file (.dot, .svg, .png or .pdf)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exclude packages whose name contains this substring (case-insensitive)
    #[arg(short, long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Report format written to stdout: markdown or json
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Print the resolved configuration parameters before analysis
    #[arg(long)]
    pub print_config: bool,

    /// Exit with code 1 when circular dependencies are found
    #[arg(long)]
    pub fail_on_cycles: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            package_name: self.package.clone(),
            repository_url: self.repository_url.clone(),
            test_repository_path: self.test_repository.clone(),
            output_file: self.output.clone(),
            filter_substring: self.filter.clone(),
            report_format: self.format,
        }
    }

    /// Default log filter derived from `-v` occurrences
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
