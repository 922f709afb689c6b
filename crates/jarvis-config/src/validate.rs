//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Validate a fully-merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_server(config)?;
    validate_logging(config)?;
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_owned(),
        message: message.into(),
    }
}

fn validate_server(config: &Config) -> ConfigResult<()> {
    if config.server.name.trim().is_empty() {
        return Err(invalid("server.name", "server name must not be empty"));
    }
    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let logging = &config.logging;

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if logging.level.trim().is_empty() {
        return Err(invalid("logging.level", "log level must not be empty"));
    }
    if !valid_levels.contains(&logging.level.as_str()) {
        return Err(invalid(
            "logging.level",
            format!(
                "unsupported log level '{}'; expected one of: {}",
                logging.level,
                valid_levels.join(", ")
            ),
        ));
    }

    let valid_formats = ["pretty", "compact", "json", "full"];
    if !valid_formats.contains(&logging.format.as_str()) {
        return Err(invalid(
            "logging.format",
            format!(
                "unsupported log format '{}'; expected one of: {}",
                logging.format,
                valid_formats.join(", ")
            ),
        ));
    }

    match logging.target.as_str() {
        "stderr" => {},
        "file" => {
            if logging.directory.is_none() {
                return Err(invalid(
                    "logging.directory",
                    "a log directory is required when target is 'file'",
                ));
            }
        },
        "stdout" => {
            return Err(invalid(
                "logging.target",
                "stdout is reserved for MCP protocol frames; use 'stderr' or 'file'",
            ));
        },
        other => {
            return Err(invalid(
                "logging.target",
                format!("unsupported log target '{other}'; expected one of: stderr, file"),
            ));
        },
    }

    let valid_rotations = ["daily", "hourly", "never"];
    if !valid_rotations.contains(&logging.rotation.as_str()) {
        return Err(invalid(
            "logging.rotation",
            format!(
                "unsupported rotation '{}'; expected one of: {}",
                logging.rotation,
                valid_rotations.join(", ")
            ),
        ));
    }

    if logging.target == "file" && logging.prefix.trim().is_empty() {
        return Err(invalid("logging.prefix", "log file prefix must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn field_of(result: ConfigResult<()>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_server_name_rejected() {
        let mut config = Config::default();
        config.server.name = "  ".to_owned();
        assert_eq!(field_of(validate(&config)), "server.name");
    }

    #[test]
    fn test_empty_level_rejected() {
        let mut config = Config::default();
        config.logging.level = String::new();
        assert_eq!(field_of(validate(&config)), "logging.level");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_owned();
        assert_eq!(field_of(validate(&config)), "logging.format");
    }

    #[test]
    fn test_stdout_target_rejected() {
        let mut config = Config::default();
        config.logging.target = "stdout".to_owned();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("stdout is reserved"));
    }

    #[test]
    fn test_file_target_requires_directory() {
        let mut config = Config::default();
        config.logging.target = "file".to_owned();
        assert_eq!(field_of(validate(&config)), "logging.directory");

        config.logging.directory = Some(PathBuf::from("/var/log/jarvis"));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_unknown_rotation_rejected() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_owned();
        assert_eq!(field_of(validate(&config)), "logging.rotation");
    }
}
