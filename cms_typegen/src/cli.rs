//! Command-line interface definitions for cms_typegen.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// cms_typegen - TypeScript declarations from a CMS schema
#[derive(Parser, Debug)]
#[command(name = "cms_typegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to typegen.toml configuration file
    #[arg(short, long, global = true, env = "TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Schema snapshot JSON file (overrides config file)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Base URL of a running CMS (overrides config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Access token for the CMS
    #[arg(long, global = true, env = "CMS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output file, may be repeated (overrides config file and environment)
    #[arg(short, long, global = true)]
    pub output: Vec<PathBuf>,

    /// Join foreign keys and related items with `&` instead of `|`
    #[arg(long, global = true)]
    pub intersection: bool,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the TypeScript declarations once
    Generate(GenerateArgs),

    /// Regenerate on every schema event read from stdin
    Watch(WatchArgs),

    /// Initialize a new typegen.toml configuration file
    Init(InitArgs),

    /// Validate configuration and the schema snapshot
    Validate(ValidateArgs),

    /// Display information about the configuration and schema
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Print the declarations to stdout instead of writing target files
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Exit with an error on lines that are not schema event names
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing typegen.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Initialize with minimal configuration
    #[arg(long)]
    pub minimal: bool,

    /// Where the schema comes from
    #[arg(long, value_enum, default_value = "file")]
    pub source: SourceKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// A snapshot JSON file
    File,
    /// A running CMS reached over HTTP
    Http,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Validate configuration file only
    #[arg(long)]
    pub config_only: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Show configuration values
    #[arg(long)]
    pub config: bool,

    /// Show schema summary
    #[arg(long)]
    pub schema: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}
