use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pertpool::commands::base_commands::{CliArgs, Commands};
use pertpool::commands::completions_cmd::completions_command;
use pertpool::commands::pool_cmd::pool_command;

fn main() -> ExitCode {
    init_logging();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Pool { .. } => match pool_command(cmd) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to pool estimates: {e}");
                ExitCode::FAILURE
            }
        },
        cmd @ Commands::Completions { .. } => {
            completions_command(cmd);
            ExitCode::SUCCESS
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pertpool=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
