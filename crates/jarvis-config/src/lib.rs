#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Layered configuration for the jarvis MCP server.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jarvis_config::Config;
//!
//! let loaded = Config::load(None).unwrap();
//! println!("Serving as: {}", loaded.config.server.name);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Explicit file** (`--config PATH`), which must exist
//! 2. **User** (`~/.jarvis/config.toml`)
//! 3. **Environment variables** (`JARVIS_LOG_LEVEL`, `JARVIS_LOG_FORMAT`)
//! 4. **Embedded defaults** (`defaults.toml` compiled into binary)
//!
//! This crate has no dependencies on other internal jarvis crates; the binary
//! converts these types into telemetry and tool settings.

/// Environment variable fallback resolution.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file discovery and loading.
pub mod loader;
/// Layered configuration merging.
pub mod merge;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::LoadedConfig;
pub use types::*;

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// See [`loader::load`] for the full algorithm.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load(explicit: Option<&std::path::Path>) -> ConfigResult<LoadedConfig> {
        loader::load(None, explicit)
    }

    /// Load configuration with an explicit `~/.jarvis` directory override.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load_with_home(
        jarvis_home: &std::path::Path,
        explicit: Option<&std::path::Path>,
    ) -> ConfigResult<LoadedConfig> {
        loader::load(Some(jarvis_home), explicit)
    }
}
