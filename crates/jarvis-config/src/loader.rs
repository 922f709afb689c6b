//! Config file discovery and layered loading.
//!
//! Implements the `Config::load()` algorithm:
//! 1. Parse `defaults.toml` → base
//! 2. Apply `JARVIS_*` env var fallbacks
//! 3. Merge `~/.jarvis/config.toml` (user)
//! 4. Merge the explicit `--config` file, if any
//! 5. Deserialize merged tree → `Config`
//! 6. Validate

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::{apply_env_fallbacks, collect_env_vars};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::deep_merge;
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Where a configuration was assembled from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The validated configuration.
    pub config: Config,
    /// Config files that contributed, in merge order.
    pub loaded_files: Vec<PathBuf>,
}

/// Load configuration with layered precedence.
///
/// `jarvis_home_override` replaces the `~/.jarvis` directory used for the
/// user layer. `explicit` is a file named on the command line; unlike the
/// user file it must exist.
///
/// # Errors
///
/// Returns a [`ConfigError`] if any config file is unreadable or malformed,
/// or if the merged configuration fails validation.
pub fn load(
    jarvis_home_override: Option<&Path>,
    explicit: Option<&Path>,
) -> ConfigResult<LoadedConfig> {
    load_with_env(jarvis_home_override, explicit, &collect_env_vars())
}

/// [`load`] with an explicit environment snapshot.
pub(crate) fn load_with_env(
    jarvis_home_override: Option<&Path>,
    explicit: Option<&Path>,
    env_vars: &HashMap<String, String>,
) -> ConfigResult<LoadedConfig> {
    // 1. Parse embedded defaults.
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;
    let mut loaded_files = Vec::new();

    // 2. Environment sits between defaults and files.
    let env_count = apply_env_fallbacks(&mut merged, env_vars);
    if env_count > 0 {
        debug!(count = env_count, "applied environment variable fallbacks");
    }

    // 3. User config.
    let jarvis_home = match jarvis_home_override {
        Some(h) => h.to_path_buf(),
        None => home_directory()?.join(".jarvis"),
    };
    let user_path = jarvis_home.join("config.toml");
    if let Some(overlay) = try_load_file(&user_path)? {
        deep_merge(&mut merged, &overlay);
        info!(path = %user_path.display(), "loaded user config");
        loaded_files.push(user_path);
    }

    // 4. Explicit config.
    if let Some(path) = explicit {
        let overlay = read_file(path)?;
        deep_merge(&mut merged, &overlay);
        info!(path = %path.display(), "loaded config file");
        loaded_files.push(path.to_path_buf());
    }

    // 5. Deserialize.
    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    // 6. Validate.
    validate::validate(&config)?;

    Ok(LoadedConfig {
        config,
        loaded_files,
    })
}

/// Try to load a file, returning `None` if the file doesn't exist.
///
/// Uses a single read operation to avoid TOCTOU races (no separate
/// exists/metadata checks before reading).
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    match read_file(path) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::ReadError { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!(path = %path.display(), "config file not found, skipping");
            Ok(None)
        },
        Err(e) => Err(e),
    }
}

/// Read and parse a TOML file that must exist.
fn read_file(path: &Path) -> ConfigResult<toml::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    // Check size after reading to avoid TOCTOU between stat and read.
    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {} byte limit",
                content.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        });
    }

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Determine the user's home directory.
fn home_directory() -> ConfigResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)
}
