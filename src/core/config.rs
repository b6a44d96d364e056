//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mars-photos/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::network::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub columns: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COLUMNS: u16 = 3;
pub const MAX_COLUMNS: u16 = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub columns: u16,
}

/// Values supplied on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub columns: Option<u16>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mars-photos/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mars-photos").join("config.toml"))
}

/// Load config from `~/.mars-photos/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarsConfig::default()`.
pub fn load_config() -> Result<MarsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarsConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`. Malformed TOML is a `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<MarsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MarsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Mars Photos Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://android-kotlin-fun-mars-server.appspot.com"   # Or MARS_API_BASE_URL
# timeout_secs = 30                                                # Or MARS_API_TIMEOUT_SECS

# [ui]
# columns = 3                        # Grid columns, 1-8
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MarsConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &MarsConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| env("MARS_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: env → config → default. Zero would expire every request.
    let timeout_secs = env("MARS_API_TIMEOUT_SECS")
        .and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Some(secs),
            _ => {
                warn!("Ignoring invalid MARS_API_TIMEOUT_SECS: {:?}", raw);
                None
            }
        })
        .or_else(|| match config.api.timeout_secs {
            Some(0) => {
                warn!("Ignoring api.timeout_secs = 0");
                None
            }
            other => other,
        })
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    // Columns: CLI → config → default, clamped
    let columns = cli
        .columns
        .or(config.ui.columns)
        .unwrap_or(DEFAULT_COLUMNS)
        .clamp(1, MAX_COLUMNS);

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        columns,
    }
}
