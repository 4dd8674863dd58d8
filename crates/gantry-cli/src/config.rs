//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//! The app config only supplies defaults; the topology description and
//! command-line flags take precedence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use gantry::{Error, OutputFormat};
use gantry_core::direction::Direction;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rendering defaults.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Returns the rendering defaults.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Default rendering settings applied when the description omits them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Default output format.
    #[serde(default)]
    format: Option<OutputFormat>,

    /// Default flow direction.
    #[serde(default)]
    direction: Option<Direction>,
}

impl RenderConfig {
    /// Returns the default output format, if configured.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Returns the default flow direction, if configured.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (gantry/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, Error> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("gantry/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "gantryworks", "gantry") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or cannot be
/// parsed as TOML.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, Error> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
