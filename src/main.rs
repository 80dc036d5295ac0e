//! Points Trie - Main entrypoint.
//!
//! This is the main entry point for the Points Trie application.
//! It parses the command line, loads configuration, initializes logging and
//! runs the interactive shell on stdin/stdout.

use clap::{Parser, Subcommand};
use points_trie_lib::config::{ConfigLoader, LogConfig, PointsConfig, ENV_PREFIX};
use points_trie_lib::error::{
    ErrorContext, ErrorReporter, PointsError, PointsResult, TracingErrorReporter,
};
use points_trie_lib::shell::Shell;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Points Trie.
#[derive(Parser, Debug)]
#[clap(name = "points-trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive shell (default)
    Shell,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// they never mix with shell output.
fn init_logging(log: &LogConfig) -> PointsResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PointsError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes the default configuration as TOML, or JSON for a `.json` path.
fn write_default_config(output: &Path) -> PointsResult<()> {
    let default_config = PointsConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(&default_config)?,
        _ => toml::to_string_pretty(&default_config)?,
    };
    std::fs::write(output, contents)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: Command, config: PointsResult<PointsConfig>) -> PointsResult<()> {
    match command {
        Command::Shell => {
            let config = config?;
            info!("Starting points trie shell");

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(stdin.lock(), stdout.lock(), &config)
                .with_reporter(Arc::new(TracingErrorReporter::new()));
            shell.run()?;

            info!("Shell finished");
            Ok(())
        }
        Command::Validate => {
            config?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => write_default_config(&output),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = loader.load().map_err(PointsError::from);

    // Logging uses the configured settings when they loaded, defaults otherwise
    let log_config = config
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let reporter = TracingErrorReporter::new();
    match run(args.command.unwrap_or(Command::Shell), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.report(ErrorContext::new(e, "main"));
            ExitCode::FAILURE
        }
    }
}
