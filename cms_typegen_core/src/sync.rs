//! The regeneration routine: fetch, merge, emit, write.

use crate::error::{Result, TypegenError};
use crate::schema::gather_collections;
use crate::source::SchemaSource;
use crate::typesync::{TypesyncConfig, generate_ts_type_string};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DISCLAIMER_HEADER: &str = "/*
 * This file is generated by 'cms_typegen'.
 * Do not edit manually.
 */
";

/// Outcome of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub collection_count: usize,
    pub written: Vec<PathBuf>,
}

/// Regenerates the declaration files from a schema source.
///
/// Every pass starts from a fresh snapshot and keeps nothing between calls,
/// so calling [`TypeSyncer::sync`] repeatedly for the same schema rewrites
/// identical files.
pub struct TypeSyncer {
    source: Box<dyn SchemaSource>,
    config: TypesyncConfig,
}

impl TypeSyncer {
    pub fn new(source: Box<dyn SchemaSource>, config: TypesyncConfig) -> Self {
        Self { source, config }
    }

    /// Fetches the schema and renders the full file contents, header included.
    pub async fn render(&self) -> Result<(usize, String)> {
        let snapshot = self.source.fetch().await?;
        let collections = gather_collections(
            &snapshot.collections,
            &snapshot.fields,
            &snapshot.relations,
        );
        let types = generate_ts_type_string(&collections, &self.config)?;
        Ok((collections.len(), format!("{DISCLAIMER_HEADER}{types}")))
    }

    /// Runs one generation pass and writes every configured target.
    pub async fn sync(&self) -> Result<SyncReport> {
        let targets = self.config.targets.to_vec();
        if targets.is_empty() {
            info!("No target file defined to automatically sync TypeScript types");
            return Ok(SyncReport::default());
        }

        debug!(source = %self.source.describe(), "Starting generation pass");
        let (collection_count, contents) = self.render().await?;

        let mut written = Vec::with_capacity(targets.len());
        for target in targets {
            let path = PathBuf::from(&target);
            write_to_file(&path, &contents)?;
            info!("Types synced into {}", target);
            written.push(path);
        }

        Ok(SyncReport {
            collection_count,
            written,
        })
    }
}

/// Writes `data` to `path`, creating missing parent directories first.
pub fn write_to_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        match std::fs::create_dir_all(parent) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(TypegenError::write(parent, e)),
        }
    }

    std::fs::write(path, data).map_err(|e| TypegenError::write(path, e))
}
