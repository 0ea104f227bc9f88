use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dds_security_policy::config::ConfigLoader;
use dds_security_policy::logging::init_logging;
use dds_security_policy::security::{build_from_settings, SecurityConfiguration};
use dds_security_policy::Settings;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `name=value` line per property
    Text,
    /// JSON array of `{name, value}` objects
    Json,
}

/// Build the DDS Security property policy for a node
#[derive(Debug, Parser)]
#[command(name = "dds-security-policy", version, about)]
struct Cli {
    /// Security root directory holding the node's credentials
    #[arg(long)]
    root: Option<PathBuf>,

    /// Fail if any mandatory security file is missing; `--enforce=false`
    /// overrides an enforcing settings file or environment
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    enforce: Option<bool>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for the property listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level or filter directive, e.g. `debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Print a sample settings file and exit
    #[arg(long)]
    print_sample_config: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_sample_config {
        print!("{}", Settings::sample_toml()?);
        return Ok(());
    }

    let mut settings = ConfigLoader::new()
        .load_from_file(cli.config.as_ref())
        .load_from_env()
        .with_root(cli.root.as_ref())
        .with_enforce(cli.enforce)
        .build()?;

    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    let _guard = init_logging(&settings.logging)?;

    let outcome = build_from_settings(&settings).context("Failed to build security policy")?;
    if let SecurityConfiguration::Unconfigured(reason) = &outcome {
        tracing::info!(?reason, "node runs without DDS Security");
    }

    match cli.format {
        OutputFormat::Text => {
            for property in outcome.properties() {
                println!("{}={}", property.name, property.value);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome.properties())
                .context("Failed to encode properties")?;
            println!("{}", json);
        }
    }

    Ok(())
}
