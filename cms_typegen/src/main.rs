mod cli;
mod commands;
mod config_builders;

use clap::Parser;
use cli::{Cli, Commands};
use cms_typegen_core::error::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    debug!("Parsed command line: {:?}", cli.command);

    match cli.command {
        Some(Commands::Generate(ref args)) => commands::generate::run(&cli, args.clone()).await,
        Some(Commands::Watch(ref args)) => commands::watch::run(&cli, args.clone()).await,
        Some(Commands::Init(ref args)) => commands::init::run(&cli, args.clone()).await,
        Some(Commands::Validate(ref args)) => commands::validate::run(&cli, args.clone()).await,
        Some(Commands::Info(ref args)) => commands::info::run(&cli, args.clone()).await,
        None => commands::generate::run_default(&cli).await,
    }
}

/// Logs go to stderr so `generate --stdout` output stays clean.
/// `RUST_LOG` takes precedence over `-v` / `--quiet`.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
