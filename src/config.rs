//! Configuration management for the rover navigator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file, overridden by command-line values

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::parser::ParseOptions;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// How final rover positions are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<x> <y> <heading>` line per rover
    #[default]
    Text,
    /// A JSON array of `{x, y, heading}` objects
    Json,
}

/// Command-line arguments for the rover navigator
#[derive(Debug, Parser)]
#[command(name = "mars-rover")]
#[command(about = "Navigate rovers across a rectangular plateau")]
#[command(version)]
pub struct Args {
    /// File of plateau coordinates, rover positions and orders
    #[arg(long, help = "Input file with plateau, rover positions and orders")]
    pub commands: PathBuf,

    /// Output format for final positions
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Treat a plateau line with no rovers as malformed input
    #[arg(long, help = "Reject input that describes no rovers")]
    pub require_rovers: bool,

    /// TOML file with default settings
    #[arg(long, help = "Config file (TOML) with format, require_rovers, log_level")]
    pub config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub require_rovers: Option<bool>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path
    pub commands: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Options passed to the input parser
    pub parse_options: ParseOptions,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    /// Command-line values win over file values, which win over defaults
    fn merge(args: Args, file: FileConfig) -> Self {
        let require_rovers = args.require_rovers || file.require_rovers.unwrap_or(false);

        Config {
            commands: args.commands,
            format: args.format.or(file.format).unwrap_or_default(),
            parse_options: ParseOptions { require_rovers },
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
