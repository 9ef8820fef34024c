//! Argument parsing and command dispatch.

use std::path::PathBuf;

use actmgt_config::{ActionApiConfig, parse_log_level};
use actmgt_telemetry::{LogFormat, LoggingConfig, init_logging};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::validate::handle_validate;
use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "actmgt", about = "Validate action payloads before they reach the API")]
struct Cli {
    #[arg(
        long,
        global = true,
        value_parser = parse_log_level,
        help = "Override the configured log level"
    )]
    log_level: Option<String>,
    #[arg(long, global = true, value_enum, help = "Select the log output format")]
    log_format: Option<LogFormatArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map an action payload file and print its secret-free projection.
    Validate(ValidateArgs),
}

#[derive(Args)]
struct ValidateArgs {
    #[arg(long, help = "Action type tag or path segment, e.g. PRE_ISSUE_ACCESS_TOKEN")]
    action_type: String,
    #[arg(long, help = "Treat the payload as a partial update")]
    update: bool,
    file: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Parses CLI arguments and executes the requested command.
/// Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn execute(cli: Cli) -> CliResult<()> {
    let config = ActionApiConfig::from_env().map_err(CliError::failure)?;
    install_logging(&cli, &config)?;
    dispatch(cli.command, &config)
}

fn install_logging(cli: &Cli, config: &ActionApiConfig) -> CliResult<()> {
    let logging = LoggingConfig {
        level: cli.log_level.as_deref().unwrap_or(config.logging.level.as_str()),
        format: resolve_log_format(cli.log_format, config.logging.format.as_deref()),
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(CliError::failure)
}

fn resolve_log_format(flag: Option<LogFormatArg>, configured: Option<&str>) -> LogFormat {
    flag.map_or_else(|| LogFormat::from_name(configured), LogFormat::from)
}

fn dispatch(command: Command, config: &ActionApiConfig) -> CliResult<()> {
    match command {
        Command::Validate(args) => {
            handle_validate(&args.action_type, args.update, &args.file, config)
        }
    }
}
