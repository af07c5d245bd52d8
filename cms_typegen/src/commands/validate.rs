//! Validate command - checks configuration and the schema snapshot.

use crate::cli::{Cli, ValidateArgs};
use crate::config_builders;
use cms_typegen_core::error::{Result, TypegenError};
use tracing::{error, info, warn};

/// Runs the validate command.
pub async fn run(cli: &Cli, args: ValidateArgs) -> Result<()> {
    info!("Validating cms_typegen configuration and schema");

    let mut has_errors = false;

    info!("Checking configuration...");
    let config = match config_builders::load_config(cli) {
        Ok(config) => {
            info!("  Configuration: OK");
            let targets = config.typesync.targets.to_vec();
            if targets.is_empty() {
                warn!("    No target files configured; generation will be a no-op");
            } else {
                info!("    Targets: {}", targets.join(", "));
            }
            info!(
                "    Intersection types: {}",
                config.typesync.use_intersection_types
            );
            Some(config)
        }
        Err(e) => {
            error!("  Configuration: FAILED");
            error!("    Error: {}", e);
            has_errors = true;
            None
        }
    };

    if let (Some(config), false) = (&config, args.config_only) {
        info!("Checking schema...");
        let rendered = match config_builders::build_syncer(config) {
            Ok(syncer) => syncer.render().await,
            Err(e) => Err(e),
        };
        match rendered {
            Ok((collection_count, contents)) => {
                info!("  Schema: OK");
                info!("    Collections: {}", collection_count);
                info!("    Output size: {} bytes", contents.len());
            }
            Err(e) => {
                error!("  Schema: FAILED");
                error!("    Error: {}", e);
                has_errors = true;
            }
        }
    }

    if has_errors {
        error!("Validation failed with errors");
        return Err(TypegenError::config("validation failed"));
    }

    info!("Validation passed");
    Ok(())
}
