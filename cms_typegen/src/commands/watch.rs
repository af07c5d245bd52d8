//! Watch command - regenerates on schema events.
//!
//! The host writes one event name per line (`fields.create`, ...) to stdin.
//! A pass runs once at startup and then once per registered event.

use crate::cli::{Cli, WatchArgs};
use crate::config_builders;
use cms_typegen_core::{
    error::{Result, TypegenError},
    hooks::HookRegistry,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Runs the watch command.
pub async fn run(cli: &Cli, args: WatchArgs) -> Result<()> {
    let config = config_builders::load_config(cli)?;
    let syncer = config_builders::build_syncer(&config)?;

    if let Err(e) = syncer.sync().await {
        error!("Initial type generation failed: {}", e);
    }

    let registry = HookRegistry::for_syncer(syncer);
    info!(
        "Listening for schema events on stdin: {}",
        registry.events().collect::<Vec<_>>().join(", ")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = line.trim();
        if event.is_empty() {
            continue;
        }

        let outcome = if args.strict {
            registry.dispatch_strict(event).await
        } else {
            registry.dispatch(event).await
        };

        match outcome {
            Ok(Some(_)) => {}
            Ok(None) => warn!("Ignoring unknown event '{}'", event),
            Err(e @ TypegenError::UnknownEvent(_)) => return Err(e),
            Err(e) => error!("Type generation for '{}' failed: {}", event, e),
        }
    }

    info!("Event stream closed");
    Ok(())
}
