//! CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use adk_cli::presentation::print_error;
use adk_cli::{Cli, CliContext, CliError, Commands, Outcome, QueryCommand, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(Outcome::Success);
    };

    let ctx = CliContext::new(cli.matrix);

    match command {
        Commands::Query { command } => match command {
            QueryCommand::Cann { version, all, json } => {
                handlers::query::execute_cann(&ctx, version.as_deref(), all, json)
            }
            QueryCommand::Framework {
                cann_version,
                framework,
                python,
                arch,
                json,
            } => handlers::query::execute_framework(
                &ctx,
                &cann_version,
                framework,
                python.as_deref(),
                arch,
                json,
            ),
        },
        Commands::Compatible(args) => handlers::compatible::execute(&ctx, &args),
        Commands::Validate(args) => handlers::validate::execute(&ctx, &args),
        Commands::Paths => handlers::paths::execute(&ctx),
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::FAILURE,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                print_error(&cli_err.to_string(), &cli_err.suggestions());
                ExitCode::from(cli_err.exit_code())
            }
            None => {
                print_error(&format!("{err:#}"), &[]);
                ExitCode::FAILURE
            }
        },
    }
}
