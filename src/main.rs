mod cli;

use apt_depgraph::adapters::outbound::console::StderrProgressReporter;
use apt_depgraph::adapters::outbound::filesystem::FileSystemMetadataSource;
use apt_depgraph::adapters::outbound::network::HttpMetadataSource;
use apt_depgraph::application::dto::{AnalysisRequest, AnalysisResponse, GraphOutputFormat};
use apt_depgraph::application::factories::{
    FormatterFactory, FormatterType, PresenterFactory, PresenterType,
};
use apt_depgraph::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
use apt_depgraph::application::use_cases::AnalyzeDependenciesUseCase;
use apt_depgraph::config::{self, AnalysisSettings, ConfigFile};
use apt_depgraph::ports::outbound::MetadataSource;
use apt_depgraph::shared::error::{DepGraphError, ExitCode};
use apt_depgraph::shared::Result;
use clap::Parser;
use cli::Args;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, with exit code 0
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments.as_i32()
            } else {
                ExitCode::Success.as_i32()
            };
            let _ = e.print();
            process::exit(code);
        }
    };
    init_tracing(&args);

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    // Resolve configuration (explicit path, or ./config.json when present)
    let config = load_config(args.config.as_deref())?;
    let settings = AnalysisSettings::resolve(config, args.overrides())?;
    tracing::debug!(?settings, "resolved settings");

    if args.print_config {
        eprint!("{}", settings.render());
    }

    // Create adapters and execute the use case
    let request = AnalysisRequest::new(
        settings.package_name.clone(),
        settings.filter_substring.clone(),
    );
    let response = match &settings.test_repository_path {
        Some(path) if settings.test_mode => {
            analyze(FileSystemMetadataSource::new(path.clone()), request).await?
        }
        _ => analyze(HttpMetadataSource::new(settings.repository_url.clone())?, request).await?,
    };

    let model = AnalysisReadModelBuilder::build(&response);

    // Report to stdout
    let report_type = FormatterType::Report(settings.report_format);
    present(&model, report_type, PresenterType::Stdout)?;

    // Graph output file
    if let Some(output_path) = &settings.output_file {
        let format = GraphOutputFormat::from_path(output_path).ok_or_else(|| {
            DepGraphError::Validation {
                message: format!(
                    "Unsupported graph output file: {}",
                    output_path.display()
                ),
            }
        })?;
        present(
            &model,
            FormatterType::Dot,
            PresenterType::Graph(output_path.clone(), format),
        )?;
    }

    if args.fail_on_cycles && response.has_cycles() {
        return Ok(ExitCode::CyclesDetected);
    }

    Ok(ExitCode::Success)
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => {
            let current_dir = std::env::current_dir()?;
            config::discover_config(&current_dir)
        }
    }
}

async fn analyze<MS: MetadataSource>(
    metadata_source: MS,
    request: AnalysisRequest,
) -> Result<AnalysisResponse> {
    let use_case = AnalyzeDependenciesUseCase::new(metadata_source, StderrProgressReporter::new());
    use_case.execute(request).await
}

fn present(
    model: &AnalysisReadModel,
    formatter_type: FormatterType,
    presenter_type: PresenterType,
) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    let formatted_output = FormatterFactory::create(formatter_type).format(model)?;
    PresenterFactory::create(presenter_type).present(&formatted_output)
}
