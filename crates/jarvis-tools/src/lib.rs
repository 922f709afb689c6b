#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Shell and filesystem tools for the jarvis MCP server.
//!
//! Provides 9 tools as in-process Rust calls: `execute_command` plus eight
//! filesystem operations (read, write, create, list, move, search, info, tree).
//! The transport that exposes them to a caller lives in `jarvis-mcp`.

mod create_directory;
mod directory_tree;
mod execute_command;
pub mod executor;
mod file_info;
mod list_directory;
mod move_file;
mod paths;
mod read_file;
mod search_files;
mod write_file;

pub use create_directory::CreateDirectoryTool;
pub use directory_tree::DirectoryTreeTool;
pub use execute_command::ExecuteCommandTool;
pub use executor::{
    CommandExecutor, CommandOutcome, CommandRequest, EnvSnapshot, ExecutorError, ShellStrategy,
};
pub use file_info::FileInfoTool;
pub use list_directory::ListDirectoryTool;
pub use move_file::MoveFileTool;
pub use read_file::ReadFileTool;
pub use search_files::SearchFilesTool;
pub use write_file::WriteFileTool;

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// A built-in tool that executes directly in-process.
#[async_trait::async_trait]
pub trait BuiltinTool: Send + Sync {
    /// Tool name as advertised to callers.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// JSON schema for tool input parameters.
    fn input_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult;
}

/// Shared context available to all built-in tools.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Home directory used to expand a leading `~` in paths.
    pub home_dir: Option<PathBuf>,
    /// Executor backing `execute_command`.
    pub executor: Arc<CommandExecutor>,
}

impl ToolContext {
    /// Create a tool context from explicit parts.
    #[must_use]
    pub fn new(home_dir: Option<PathBuf>, executor: CommandExecutor) -> Self {
        Self {
            home_dir,
            executor: Arc::new(executor),
        }
    }

    /// Context for the running process: the user's home directory and an
    /// executor that inherits this process's environment.
    #[must_use]
    pub fn from_process() -> Self {
        let home_dir = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::new(home_dir, CommandExecutor::for_host())
    }
}

/// Text produced by a tool.
///
/// `is_error` marks a payload that describes a failure the tool still wants
/// to report as text (a command that ran and exited non-zero), as opposed to
/// a [`ToolError`], which means the request itself was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// The text payload.
    pub text: String,
    /// Whether the payload describes a failure.
    pub is_error: bool,
}

impl ToolOutput {
    /// A successful text payload.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// A text payload describing a failure.
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Tool execution errors.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Path not found.
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// The requested working directory was rejected.
    #[error(transparent)]
    WorkingDirectory(#[from] ExecutorError),

    /// Execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Whether the error was caused by the caller's input rather than by the host.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_) | Self::PathNotFound(_) | Self::WorkingDirectory(_)
        )
    }
}

/// Result type for tool execution.
pub type ToolResult = Result<ToolOutput, ToolError>;

/// Transport-neutral description of a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for input parameters.
    pub input_schema: Value,
}

/// Registry of built-in tools for lookup and definition export.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn BuiltinTool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with all default tools registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ExecuteCommandTool));
        registry.register(Box::new(ReadFileTool));
        registry.register(Box::new(WriteFileTool));
        registry.register(Box::new(CreateDirectoryTool));
        registry.register(Box::new(ListDirectoryTool));
        registry.register(Box::new(MoveFileTool));
        registry.register(Box::new(SearchFilesTool));
        registry.register(Box::new(FileInfoTool));
        registry.register(Box::new(DirectoryTreeTool));
        registry
    }

    /// Drop the named tools. Unknown names are returned so callers can report them.
    pub fn remove_all<'a>(&mut self, names: &'a [String]) -> Vec<&'a str> {
        names
            .iter()
            .filter(|name| self.tools.remove(name.as_str()).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Register a tool.
    pub fn register(&mut self, tool: Box<dyn BuiltinTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn BuiltinTool> {
        self.tools.get(name).map(AsRef::as_ref)
    }

    /// Registered tool names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Export all tool definitions, sorted by name.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a required string argument.
pub(crate) fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::InvalidArguments(format!("{key} is required")))
}

/// Extract an optional string argument. Non-string values count as absent.
pub(crate) fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TOOLS: [&str; 9] = [
        "create_directory",
        "directory_tree",
        "execute_command",
        "get_file_info",
        "list_directory",
        "move_file",
        "read_file",
        "search_files",
        "write_file",
    ];

    #[test]
    fn test_registry_with_defaults() {
        let registry = ToolRegistry::with_defaults();
        for name in ALL_TOOLS {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names(), ALL_TOOLS.to_vec());
    }

    #[test]
    fn test_all_definitions() {
        let registry = ToolRegistry::with_defaults();
        let defs = registry.definitions();
        assert_eq!(defs.len(), 9);
        for def in &defs {
            assert!(!def.description.is_empty());
            assert_eq!(def.input_schema["type"], "object");
            assert!(def.input_schema["required"].is_array());
        }
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ALL_TOOLS.to_vec());
    }

    #[test]
    fn test_remove_all_reports_unknown() {
        let mut registry = ToolRegistry::with_defaults();
        let disabled = vec!["move_file".to_string(), "teleport".to_string()];
        let unknown = registry.remove_all(&disabled);
        assert_eq!(unknown, vec!["teleport"]);
        assert!(registry.get("move_file").is_none());
        assert_eq!(registry.names().len(), 8);
    }

    #[test]
    fn test_required_str() {
        let args = serde_json::json!({"path": "/tmp", "count": 3});
        assert_eq!(required_str(&args, "path").unwrap(), "/tmp");
        let err = required_str(&args, "count").unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: count is required");
        assert!(required_str(&args, "missing").is_err());
        assert_eq!(optional_str(&args, "count"), None);
    }

    #[test]
    fn test_caller_errors() {
        assert!(ToolError::InvalidArguments("x".into()).is_caller_error());
        assert!(ToolError::PathNotFound("x".into()).is_caller_error());
        assert!(
            ToolError::WorkingDirectory(ExecutorError::WorkingDirectoryNotFound {
                path: PathBuf::from("/nope"),
            })
            .is_caller_error()
        );
        assert!(!ToolError::ExecutionFailed("x".into()).is_caller_error());
    }
}
