use clap::Parser;
use sbom_validator::application::dto::ReportFormat;
use std::path::PathBuf;

/// Validate CycloneDX and SPDX JSON SBOMs against their JSON Schemas
#[derive(Parser, Debug)]
#[command(name = "sbom-validator")]
#[command(version)]
#[command(
    about = "Validate CycloneDX and SPDX JSON SBOMs against their JSON Schemas",
    long_about = None
)]
pub struct Args {
    /// Path to the SBOM file to validate
    #[arg(value_name = "FILE", required_unless_present = "list_schemas")]
    pub file: Option<PathBuf>,

    /// Output format: text or json [default: text]
    #[arg(short = 'F', long)]
    pub format: Option<ReportFormat>,

    /// Maximum number of violations listed in text output [default: 10]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_violations: Option<u64>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load schemas from this directory instead of the embedded corpus
    #[arg(short, long, value_name = "DIR")]
    pub schema_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./sbom-validator.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available schemas and exit
    #[arg(long)]
    pub list_schemas: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
