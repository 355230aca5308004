mod cli;

use cli::Args;
use sbom_validator::adapters::outbound::filesystem::FileSystemReader;
use sbom_validator::adapters::outbound::formatters::DEFAULT_MAX_VIOLATIONS;
use sbom_validator::adapters::outbound::schemas::{
    CachingSchemaRepository, DirectorySchemaRepository, EmbeddedSchemaRepository,
};
use sbom_validator::application::dto::ReportFormat;
use sbom_validator::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_validator::application::use_cases::ValidateSbomUseCase;
use sbom_validator::config::{self, ConfigFile};
use sbom_validator::ports::inbound::SbomValidationPort;
use sbom_validator::ports::outbound::{SbomReader, SchemaRepository};
use sbom_validator::sbom_validation::domain::{Dialect, SchemaKey};
use sbom_validator::shared::error::ExitCode;
use sbom_validator::shared::Result;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
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
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Effective settings after merging CLI flags over the config file
struct Settings {
    format: ReportFormat,
    max_violations: usize,
    schema_dir: Option<PathBuf>,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse().map_err(anyhow::Error::msg)?,
            (None, None) => ReportFormat::default(),
        };
        let max_violations = args
            .max_violations
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .or(config.max_violations)
            .unwrap_or(DEFAULT_MAX_VIOLATIONS);

        Ok(Self {
            format,
            max_violations,
            schema_dir: args.schema_dir.clone().or(config.schema_dir),
        })
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

fn create_repository(schema_dir: Option<&PathBuf>) -> Result<Arc<dyn SchemaRepository>> {
    Ok(match schema_dir {
        Some(dir) => Arc::new(CachingSchemaRepository::new(DirectorySchemaRepository::load(
            dir,
        )?)),
        None => Arc::new(EmbeddedSchemaRepository::new()),
    })
}

fn list_schemas(repository: &dyn SchemaRepository) -> String {
    let mut output = String::new();
    for dialect in Dialect::ALL {
        for version in repository.available_versions(dialect) {
            output.push_str(&SchemaKey::new(dialect, version.as_str().into()).to_string());
            output.push('\n');
        }
    }
    output
}

fn run(args: Args) -> Result<ExitCode> {
    let settings = Settings::merge(&args, load_config(&args)?)?;
    let repository = create_repository(settings.schema_dir.as_ref())?;
    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));

    if args.list_schemas {
        presenter.present(&list_schemas(repository.as_ref()))?;
        return Ok(ExitCode::Success);
    }

    let Some(path) = args.file.as_deref() else {
        anyhow::bail!("No SBOM file given.\n\n💡 Hint: Pass the path of the SBOM to validate.");
    };

    let sbom = FileSystemReader::new().read_sbom(path)?;
    let use_case = ValidateSbomUseCase::new(repository);
    let report = use_case.execute(&sbom)?;

    let formatter = FormatterFactory::create(settings.format, settings.max_violations);
    presenter.present(&formatter.format(&report)?)?;

    Ok(if report.is_valid() {
        ExitCode::Success
    } else {
        ExitCode::ValidationFailed
    })
}
