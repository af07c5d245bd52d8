//! Builds the effective configuration from the config file, the environment
//! and command-line overrides.

use crate::cli::Cli;
use cms_typegen_core::{
    config::TypegenConfig,
    error::Result,
    source,
    sync::TypeSyncer,
    typesync::Targets,
};
use tracing::{debug, error, info};

/// Loads the configuration and applies the global CLI flags on top.
pub fn load_config(cli: &Cli) -> Result<TypegenConfig> {
    let loaded = match &cli.config {
        Some(path) => TypegenConfig::from_path(path),
        None => TypegenConfig::new(),
    };

    let mut config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut TypegenConfig) {
    if let Some(snapshot) = &cli.snapshot {
        debug!("Snapshot path overridden from command line");
        config.source.snapshot_path = Some(snapshot.to_string_lossy().to_string());
        config.source.url = None;
    }
    if let Some(url) = &cli.url {
        debug!("Source URL overridden from command line");
        config.source.url = Some(url.clone());
        if cli.snapshot.is_none() {
            config.source.snapshot_path = None;
        }
    }
    if cli.token.is_some() {
        config.source.token = cli.token.clone();
    }
    if !cli.output.is_empty() {
        debug!("Target files overridden from command line");
        config.typesync.targets = Targets::Many(
            cli.output
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
        );
    }
    if cli.intersection {
        config.typesync.use_intersection_types = true;
    }
}

/// Creates the syncer for the configured source and targets.
pub fn build_syncer(config: &TypegenConfig) -> Result<TypeSyncer> {
    let source = source::from_config(&config.source)?;
    Ok(TypeSyncer::new(source, config.typesync.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn base_config() -> TypegenConfig {
        let mut config = TypegenConfig::default();
        config.source.url = Some("http://cms.local".to_string());
        config.typesync.targets = Targets::One("./from_file.ts".to_string());
        config
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["cms_typegen"]).unwrap();
        let mut config = base_config();
        apply_overrides(&cli, &mut config);
        assert_eq!(config, base_config());
    }

    #[test]
    fn test_snapshot_override_replaces_url() {
        let cli = Cli::try_parse_from(["cms_typegen", "--snapshot", "schema.json"]).unwrap();
        let mut config = base_config();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.source.snapshot_path.as_deref(), Some("schema.json"));
        assert_eq!(config.source.url, None);
    }

    #[test]
    fn test_output_and_intersection_overrides() {
        let cli = Cli::try_parse_from([
            "cms_typegen",
            "--output",
            "out/types.ts",
            "--intersection",
        ])
        .unwrap();
        let mut config = base_config();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.typesync.targets.to_vec(), vec!["out/types.ts"]);
        assert!(config.typesync.use_intersection_types);
    }
}
