//! Wikistrip CLI entry point.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wikistrip::cli::{Cli, Commands, ConfigCommands};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WIKISTRIP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config_path = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Strip(args) => commands::strip::handle(args, config_path),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(config_path, *force)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
