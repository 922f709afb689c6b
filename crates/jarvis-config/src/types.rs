//! Configuration types for the jarvis MCP server.
//!
//! Every struct implements [`Default`] so that a bare `[section]` header in
//! TOML produces a working configuration. Values are kept as plain strings
//! here; conversion to telemetry and tool types happens in the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity advertised during the MCP handshake.
    pub server: ServerSection,
    /// Logging level, format, and destination.
    pub logging: LoggingSection,
    /// Tool availability.
    pub tools: ToolsSection,
}

// ---------------------------------------------------------------------------
// ServerSection
// ---------------------------------------------------------------------------

/// Server identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Name reported in `serverInfo`.
    pub name: String,
    /// Free-form instructions sent to the client on initialize.
    pub instructions: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: "jarvis-mcp".to_owned(),
            instructions: None,
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Destination: `"stderr"` or `"file"`.
    pub target: String,
    /// Log directory, required when `target = "file"`.
    pub directory: Option<PathBuf>,
    /// File name prefix for rolling log files.
    pub prefix: String,
    /// Rotation for file logs: `"daily"`, `"hourly"`, or `"never"`.
    pub rotation: String,
    /// Per-crate tracing directives (e.g. `["jarvis_tools=debug"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "compact".to_owned(),
            target: "stderr".to_owned(),
            directory: None,
            prefix: "jarvis".to_owned(),
            rotation: "daily".to_owned(),
            directives: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ToolsSection
// ---------------------------------------------------------------------------

/// Which built-in tools are exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsSection {
    /// Tool names to leave out of the registry.
    pub disabled: Vec<String>,
}
