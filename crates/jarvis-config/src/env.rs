//! Environment variable fallbacks.
//!
//! Applied on top of the embedded defaults and below every config file, so a
//! value written in a file always wins over the environment.

use std::collections::HashMap;

/// Environment variables consulted, and the dotted config path each one sets.
const ENV_FALLBACKS: [(&str, &str, &str); 2] = [
    ("JARVIS_LOG_LEVEL", "logging", "level"),
    ("JARVIS_LOG_FORMAT", "logging", "format"),
];

/// Snapshot the `JARVIS_*` variables from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(key, _)| key.starts_with("JARVIS_"))
        .collect()
}

/// Write recognised variables into `merged`. Returns how many were applied.
///
/// Blank values are ignored.
pub fn apply_env_fallbacks(merged: &mut toml::Value, env_vars: &HashMap<String, String>) -> usize {
    let mut applied = 0usize;

    for (var, section, key) in ENV_FALLBACKS {
        let Some(value) = env_vars.get(var).map(|v| v.trim()).filter(|v| !v.is_empty()) else {
            continue;
        };
        let Some(root) = merged.as_table_mut() else {
            return applied;
        };

        let table = root
            .entry(section)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
        if let Some(table) = table.as_table_mut() {
            table.insert(key.to_owned(), toml::Value::String(value.to_owned()));
            applied = applied.saturating_add(1);
        }
    }

    applied
}
