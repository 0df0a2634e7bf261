//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--blocks-dir`, `--no-color`) via [`AppConfig::apply_overrides`]
//! 2. Environment variables (`MKBLOCK_BLOCKS__DIR`, `MKBLOCK_OUTPUT__NO_COLOR`)
//! 3. Config file (`--config FILE`, else `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

/// Blocks are created here unless configured otherwise.
pub const DEFAULT_BLOCKS_DIR: &str = "app/blocks";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where blocks live.
    pub blocks: BlocksConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksConfig {
    /// Root directory; relative paths resolve against the working directory.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_BLOCKS_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Some(Self::environment()))
    }

    fn load_from(
        path: &Path,
        required: bool,
        environment: Option<Environment>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode default config")?,
            )
            .add_source(File::from(path).required(required));

        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        builder
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn environment() -> Environment {
        Environment::with_prefix("MKBLOCK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Apply CLI flags on top of the loaded configuration.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(dir) = &args.blocks_dir {
            self.blocks.dir = dir.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mkblock.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mkblock", "mkblock")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mkblock.toml"))
    }
}
