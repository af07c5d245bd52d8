//! Generate command - runs one generation pass.

use crate::cli::{Cli, GenerateArgs};
use crate::config_builders;
use cms_typegen_core::error::Result;
use std::io::Write;
use tracing::{debug, error, info};

/// Runs the generate command with default settings.
pub async fn run_default(cli: &Cli) -> Result<()> {
    run(cli, GenerateArgs::default()).await
}

/// Runs the generate command.
pub async fn run(cli: &Cli, args: GenerateArgs) -> Result<()> {
    info!("Starting TypeScript type generation");

    let config = config_builders::load_config(cli)?;
    let syncer = config_builders::build_syncer(&config)?;

    if args.stdout {
        let (collection_count, contents) = syncer.render().await?;
        debug!("Rendered {} collections", collection_count);
        std::io::stdout().write_all(contents.as_bytes())?;
        return Ok(());
    }

    match syncer.sync().await {
        Ok(report) => {
            info!(
                "Type generation complete. {} collection(s), {} file(s) written",
                report.collection_count,
                report.written.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("Type generation failed: {}", e);
            Err(e)
        }
    }
}
