//! Info command - displays configuration and a schema summary.

use crate::cli::{Cli, InfoArgs, InfoFormat};
use crate::config_builders;
use cms_typegen_core::{
    config::TypegenConfig,
    error::Result,
    schema::{Collections, gather_collections},
    source::{self, SchemaSource},
    typesync::pascal_case,
};
use serde_json::json;
use tracing::info;

/// Runs the info command.
pub async fn run(cli: &Cli, args: InfoArgs) -> Result<()> {
    // If no specific flags, show all
    let show_all = !args.config && !args.schema;
    let config = config_builders::load_config(cli)?;

    if args.config || show_all {
        show_config(&config, args.format)?;
    }

    if args.schema || show_all {
        show_schema(&config, args.format).await?;
    }

    Ok(())
}

fn show_config(config: &TypegenConfig, format: InfoFormat) -> Result<()> {
    match format {
        InfoFormat::Pretty => {
            println!("\n=== Configuration ===\n");
            println!(
                "Snapshot file: {}",
                config.source.snapshot_path.as_deref().unwrap_or("-")
            );
            println!("Source URL:    {}", config.source.url.as_deref().unwrap_or("-"));
            println!(
                "Token:         {}",
                if config.source.token.is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            println!("\nTargets:");
            for target in config.typesync.targets.to_vec() {
                println!("  - {}", target);
            }
            println!(
                "\nIntersection types: {}",
                config.typesync.use_intersection_types
            );
            println!("Lookup type:        {}", config.typesync.lookup_type_name);
        }
        InfoFormat::Json => {
            let value = json!({
                "source": {
                    "snapshot_path": config.source.snapshot_path,
                    "url": config.source.url,
                    "token": config.source.token.is_some(),
                },
                "targets": config.typesync.targets.to_vec(),
                "use_intersection_types": config.typesync.use_intersection_types,
                "lookup_type_name": config.typesync.lookup_type_name,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

async fn show_schema(config: &TypegenConfig, format: InfoFormat) -> Result<()> {
    let snapshot = source::from_config(&config.source)?.fetch().await?;
    let collections = gather_collections(
        &snapshot.collections,
        &snapshot.fields,
        &snapshot.relations,
    );

    match format {
        InfoFormat::Pretty => print_schema_pretty(&collections),
        InfoFormat::Json => {
            let value: Vec<_> = collections
                .values()
                .map(|c| {
                    json!({
                        "collection": c.collection,
                        "type_name": pascal_case(&c.collection),
                        "fields": c.fields.len(),
                        "relations": c.fields.iter().filter(|f| f.relation.is_some()).count(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    info!("Use 'cms_typegen generate --stdout' to preview the declarations");
    Ok(())
}

fn print_schema_pretty(collections: &Collections) {
    println!("\n=== Schema Summary ===\n");
    println!("Collections: {}", collections.len());

    for collection in collections.values() {
        println!(
            "\n  {} ({}):",
            collection.collection,
            pascal_case(&collection.collection)
        );
        println!("    Fields: {}", collection.fields.len());
        let related: Vec<_> = collection
            .fields
            .iter()
            .filter(|f| f.relation.is_some())
            .map(|f| f.name())
            .collect();
        if !related.is_empty() {
            println!("    Relations: {}", related.join(", "));
        }
    }
}
