//! Init command - initializes typegen.toml configuration.

use crate::cli::{Cli, InitArgs, SourceKind};
use cms_typegen_core::{config::CONFIG_FILE_NAME, error::Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Runs the init command.
pub async fn run(_cli: &Cli, args: InitArgs) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(());
    }

    let content = if args.minimal {
        generate_minimal_config(args.source)
    } else {
        generate_full_config(args.source)
    };

    fs::write(config_path, content)?;
    info!("Created {}", CONFIG_FILE_NAME);

    if args.source == SourceKind::Http {
        let env_path = Path::new(".env");
        if !env_path.exists() {
            fs::write(env_path, generate_env_template())?;
            info!("Created .env template");
        }
    }

    info!("Next steps:");
    info!("  1. Edit {} to point at your schema", CONFIG_FILE_NAME);
    info!("  2. Run 'cms_typegen generate' to write the declarations");

    Ok(())
}

fn source_section(source: SourceKind) -> &'static str {
    match source {
        SourceKind::File => {
            r#"[source]
snapshot_path = "./schema.json"
"#
        }
        SourceKind::Http => {
            r#"[source]
url = "${CMS_URL}"
token = "${CMS_TOKEN:-}"
"#
        }
    }
}

pub(crate) fn generate_minimal_config(source: SourceKind) -> String {
    format!(
        r#"{}
[typesync]
targets = "./src/generated/cms.ts"
"#,
        source_section(source)
    )
}

pub(crate) fn generate_full_config(source: SourceKind) -> String {
    format!(
        r#"# cms_typegen configuration

# Where the schema snapshot comes from. A snapshot file wins over a URL.
{}
[typesync]
# One path or a list of paths. GENERATE_TYPES_SYNCED_TS_FILES overrides this.
targets = ["./src/generated/cms.ts"]

# Join foreign keys and related items with `&` instead of `|`
use_intersection_types = false

# Name of the type mapping collection names to their generated types
lookup_type_name = "GeneratedDirectusTypes"
"#,
        source_section(source)
    )
}

fn generate_env_template() -> String {
    r#"# CMS connection
CMS_URL=http://localhost:8055
CMS_TOKEN=
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_typegen_core::config::TypegenConfig;

    #[test]
    fn test_generated_configs_parse() {
        for content in [
            generate_minimal_config(SourceKind::File),
            generate_full_config(SourceKind::File),
        ] {
            let config = TypegenConfig::from_str_with_env(&content).unwrap();
            assert_eq!(config.source.snapshot_path.as_deref(), Some("./schema.json"));
            assert_eq!(
                config.typesync.targets.to_vec(),
                vec!["./src/generated/cms.ts"]
            );
        }
    }

    #[test]
    fn test_http_config_mentions_url() {
        let content = generate_full_config(SourceKind::Http);
        assert!(content.contains("url = \"${CMS_URL}\""));
        assert!(!content.contains("snapshot_path"));
    }
}
