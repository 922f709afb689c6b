//! Bridge from `jarvis_config::Config` to runtime types.

use jarvis_config::Config;
use jarvis_mcp::ServerIdentity;
use jarvis_telemetry::{FileRotation, LogConfig, LogFormat};
use jarvis_tools::ToolRegistry;
use tracing::warn;

/// Convert config to [`LogConfig`].
#[must_use]
pub(crate) fn to_log_config(cfg: &Config) -> LogConfig {
    let format = match cfg.logging.format.as_str() {
        "pretty" => LogFormat::Pretty,
        "json" => LogFormat::Json,
        "full" => LogFormat::Full,
        _ => LogFormat::Compact,
    };

    let mut log_config = LogConfig::new(&cfg.logging.level).with_format(format);

    if cfg.logging.target == "file"
        && let Some(dir) = &cfg.logging.directory
    {
        let rotation = match cfg.logging.rotation.as_str() {
            "hourly" => FileRotation::Hourly,
            "never" => FileRotation::Never,
            _ => FileRotation::Daily,
        };
        log_config = log_config.with_file_logging(dir, &cfg.logging.prefix, rotation);
    }

    for directive in &cfg.logging.directives {
        log_config = log_config.with_directive(directive);
    }

    log_config
}

/// Convert config to the identity advertised on initialize.
#[must_use]
pub(crate) fn to_identity(cfg: &Config) -> ServerIdentity {
    ServerIdentity {
        name: cfg.server.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        instructions: cfg.server.instructions.clone(),
    }
}

/// Build the tool registry, leaving out `[tools] disabled` entries.
#[must_use]
pub(crate) fn to_registry(cfg: &Config) -> ToolRegistry {
    let mut registry = ToolRegistry::with_defaults();
    for unknown in registry.remove_all(&cfg.tools.disabled) {
        warn!(tool = unknown, "Ignoring unknown tool in [tools] disabled");
    }
    registry
}
