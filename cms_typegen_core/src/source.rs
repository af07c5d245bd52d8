//! Schema sources: where the three record lists of a snapshot come from.

use crate::config::SourceConfig;
use crate::error::{Result, TypegenError};
use crate::schema::SchemaSnapshot;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Supplies a fresh schema snapshot for every generation pass.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    async fn fetch(&self) -> Result<SchemaSnapshot>;

    /// Short human-readable description used in log output.
    fn describe(&self) -> String;
}

/// Reads a snapshot JSON document from disk.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SchemaSource for SnapshotFileSource {
    async fn fetch(&self) -> Result<SchemaSnapshot> {
        debug!("Reading schema snapshot from {:?}", self.path);
        let contents = tokio::fs::read_to_string(&self.path).await?;
        SchemaSnapshot::from_json(&contents)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Records that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: SchemaSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: SchemaSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SchemaSource for StaticSource {
    async fn fetch(&self) -> Result<SchemaSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }
}

/// Fetches `{base_url}/schema/snapshot` from a running CMS.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    endpoint: url::Url,
    token: Option<String>,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSnapshotSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let endpoint = snapshot_endpoint(base_url)?;
        Ok(Self {
            endpoint,
            token,
            client: reqwest::Client::new(),
        })
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl SchemaSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<SchemaSnapshot> {
        debug!("Fetching schema snapshot from {}", self.endpoint);
        let mut request = self.client.get(self.endpoint.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        SchemaSnapshot::from_json(&body)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}

/// Builds the snapshot endpoint, keeping any path prefix of the base URL.
pub fn snapshot_endpoint(base_url: &str) -> Result<url::Url> {
    let trimmed = base_url.trim_end_matches('/');
    Ok(url::Url::parse(&format!("{trimmed}/schema/snapshot"))?)
}

/// Picks a source from configuration. A snapshot file takes precedence over
/// a URL.
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn SchemaSource>> {
    if let Some(path) = &config.snapshot_path {
        info!("Using schema snapshot file {}", path);
        return Ok(Box::new(SnapshotFileSource::new(path)));
    }

    if let Some(url) = &config.url {
        #[cfg(feature = "http")]
        {
            info!("Using schema endpoint at {}", url);
            return Ok(Box::new(HttpSnapshotSource::new(url, config.token.clone())?));
        }
        #[cfg(not(feature = "http"))]
        {
            return Err(TypegenError::config(format!(
                "source.url = {url} requires the `http` feature"
            )));
        }
    }

    Err(TypegenError::SourceNotConfigured)
}
