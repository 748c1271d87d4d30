//! Entry point: parse CLI, set up logging, and dispatch to the pipeline steps.

use clap::Parser;
use nhl_stats::{
    cli::{Commands, NhlStats},
    commands::{handle_collect, handle_transform},
    Config, Result,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = NhlStats::parse();
    init_tracing(app.verbose);

    if let Err(e) = run(app.command).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Collect { args } => {
            let config = Config::from_args(&args)?;
            handle_collect(&config).await?;
        }

        Commands::Transform { args, no_summary } => {
            let config = Config::from_args(&args)?;
            handle_transform(&config, !no_summary)?;
        }

        Commands::Run { args, no_summary } => {
            let config = Config::from_args(&args)?;
            handle_collect(&config).await?;
            handle_transform(&config, !no_summary)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
