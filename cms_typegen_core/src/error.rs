use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Unhandled choices structure: {field}")]
    UnhandledChoices { field: String },

    #[error("Unknown schema event: {0}")]
    UnknownEvent(String),

    #[error("No schema source configured (set source.snapshot_path or source.url)")]
    SourceNotConfigured,
}

pub type Result<T> = std::result::Result<T, TypegenError>;

impl TypegenError {
    pub fn config(message: impl Into<String>) -> Self {
        TypegenError::Config(message.into())
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TypegenError::Write {
            path: path.into(),
            source,
        }
    }
}
