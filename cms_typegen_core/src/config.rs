use crate::error::{Result, TypegenError};
use crate::typesync::config::{Targets, TypesyncConfig};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

pub const CONFIG_FILE_NAME: &str = "typegen.toml";

/// Environment variable listing target files, comma separated.
pub const TARGETS_ENV_VAR: &str = "GENERATE_TYPES_SYNCED_TS_FILES";

/// Where the schema snapshot comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Path to a snapshot JSON file
    #[serde(default)]
    pub snapshot_path: Option<String>,

    /// Base URL of a running CMS exposing `/schema/snapshot`
    #[serde(default)]
    pub url: Option<String>,

    /// Static access token sent as a bearer token
    #[serde(default)]
    pub token: Option<String>,
}

/// Root configuration for cms_typegen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypegenConfig {
    /// Schema source configuration
    #[serde(default)]
    pub source: SourceConfig,
    /// Type synchronization configuration (TypeScript generation and output files)
    #[serde(default)]
    pub typesync: TypesyncConfig,
}

impl TypegenConfig {
    /// Load configuration by searching for typegen.toml in the current
    /// directory and its ancestors. A missing file yields the defaults.
    pub fn new() -> Result<TypegenConfig> {
        match Self::find_config_file()? {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Self::from_str_with_env("")
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn from_path(path: &Path) -> Result<TypegenConfig> {
        info!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            TypegenError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_str_with_env(&contents)
    }

    /// Parse configuration text, load `.env`, substitute `${VAR}` references
    /// and apply the targets override from the environment.
    pub fn from_str_with_env(contents: &str) -> Result<TypegenConfig> {
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        let mut config: TypegenConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            TypegenError::from(e)
        })?;

        config.source.snapshot_path = Self::substitute_opt(config.source.snapshot_path)?;
        config.source.url = Self::substitute_opt(config.source.url)?;
        config.source.token = Self::substitute_opt(config.source.token)?;
        config.typesync.targets = match config.typesync.targets {
            Targets::One(path) => Targets::One(Self::substitute_env_vars(&path)?),
            Targets::Many(paths) => Targets::Many(
                paths
                    .iter()
                    .map(|p| Self::substitute_env_vars(p))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };

        if let Some(targets) = Self::targets_from_env() {
            debug!("Using target files from {}", TARGETS_ENV_VAR);
            config.typesync.targets = targets;
        }

        debug!(
            targets = ?config.typesync.targets.to_vec(),
            use_intersection_types = config.typesync.use_intersection_types,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Searches for `typegen.toml` starting from the current directory
    /// and traversing up to the root.
    fn find_config_file() -> Result<Option<PathBuf>> {
        let current_dir = env::current_dir()?;
        debug!("Starting config file search from: {:?}", current_dir);

        for path in current_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.exists() {
                return Ok(Some(config_path));
            }
        }

        Ok(None)
    }

    fn targets_from_env() -> Option<Targets> {
        let value = env::var(TARGETS_ENV_VAR).ok()?;
        let paths: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        (!paths.is_empty()).then_some(Targets::Many(paths))
    }

    fn substitute_opt(value: Option<String>) -> Result<Option<String>> {
        value.map(|v| Self::substitute_env_vars(&v)).transpose()
    }

    /// Substitute environment variables in config strings
    /// Supports ${VAR_NAME:-default} syntax
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        // Pattern to match ${VAR_NAME} or ${VAR_NAME:-default}
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
            .map_err(|e| TypegenError::config(e.to_string()))?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(TypegenError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
