//! Configuration file management for pacer.
//!
//! Provides a TOML-based config file at `~/.config/pacer/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pacer_store::config::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Command to invoke for the external AI service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// Data directory holding the project blobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the pacer config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/pacer` or `~/.config/pacer`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("pacer");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pacer")
}

/// Return the path to the pacer config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Default generator command looked up on `$PATH`.
pub const DEFAULT_GENERATOR_COMMAND: &str = "gemini";

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct PacerConfig {
    pub generator_command: String,
    pub store_config: StoreConfig,
}

impl PacerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// - Generator: `cli_generator` > `PACER_GENERATOR_CMD` env >
    ///   `config_file.generator.command` > [`DEFAULT_GENERATOR_COMMAND`]
    /// - Data dir: `cli_data_dir` > `config_file.store.data_dir` > the
    ///   store's own chain (`PACER_DATA_DIR` env > platform data dir)
    pub fn resolve(cli_generator: Option<&str>, cli_data_dir: Option<PathBuf>) -> Self {
        let file_config = load_config().ok();

        let generator_command = if let Some(cmd) = cli_generator {
            cmd.to_string()
        } else if let Ok(cmd) = std::env::var("PACER_GENERATOR_CMD") {
            cmd
        } else if let Some(cmd) = file_config
            .as_ref()
            .and_then(|cfg| cfg.generator.command.clone())
        {
            cmd
        } else {
            DEFAULT_GENERATOR_COMMAND.to_string()
        };

        let dir_override =
            cli_data_dir.or_else(|| file_config.and_then(|cfg| cfg.store.data_dir));
        let store_config = StoreConfig::resolve(dir_override);

        Self {
            generator_command,
            store_config,
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
