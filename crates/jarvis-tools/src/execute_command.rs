//! Execute command tool — runs an OS command through the host shell.

use crate::executor::CommandRequest;
use crate::{BuiltinTool, ToolContext, ToolError, ToolOutput, ToolResult, optional_str, required_str};
use serde_json::Value;

/// Argument key for the working directory.
const WORKING_DIRECTORY: &str = "working_directory";
/// Older clients send the key with a space.
const LEGACY_WORKING_DIRECTORY: &str = "working directory";

/// Built-in tool for executing shell commands.
pub struct ExecuteCommandTool;

#[async_trait::async_trait]
impl BuiltinTool for ExecuteCommandTool {
    fn name(&self) -> &'static str {
        "execute_command"
    }

    fn description(&self) -> &'static str {
        "Execute OS command. Runs through `sh -c` (or `cmd /C` on Windows) with the \
         server's environment and returns the combined stdout/stderr."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "Full OS command to execute"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Working directory for the command"
                }
            },
            "required": ["command"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let command = required_str(&args, "command")?;
        if command.trim().is_empty() {
            return Err(ToolError::InvalidArguments("command must not be empty".into()));
        }

        let working_directory = optional_str(&args, WORKING_DIRECTORY)
            .or_else(|| optional_str(&args, LEGACY_WORKING_DIRECTORY))
            .unwrap_or_default();

        let request = CommandRequest::new(command).with_working_directory(working_directory);
        let executor = ctx.executor.clone();

        // The executor blocks until the child exits.
        let outcome = tokio::task::spawn_blocking(move || executor.execute(&request))
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Task join failed: {e}")))??;

        if outcome.succeeded {
            Ok(ToolOutput::text(outcome.formatted_message))
        } else {
            Ok(ToolOutput::failure(outcome.formatted_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandExecutor, ExecutorError};
    use tempfile::TempDir;

    fn ctx() -> ToolContext {
        ToolContext::new(None, CommandExecutor::for_host())
    }

    #[tokio::test]
    async fn test_execute_echo() {
        let result = ExecuteCommandTool
            .execute(serde_json::json!({"command": "echo hello"}), &ctx())
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.text.starts_with("Command executed successfully: echo hello"));
        assert!(result.text.contains("hello"));
    }

    #[tokio::test]
    async fn test_failed_command_is_text() {
        let result = ExecuteCommandTool
            .execute(serde_json::json!({"command": "nonexistentcommand123"}), &ctx())
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.text.contains("Command failed"));
        assert!(result.text.contains("Error: "));
    }

    #[tokio::test]
    async fn test_missing_command() {
        let result = ExecuteCommandTool
            .execute(serde_json::json!({"working_directory": "/tmp"}), &ctx())
            .await;

        assert!(matches!(result.unwrap_err(), ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_non_string_command() {
        let result = ExecuteCommandTool
            .execute(serde_json::json!({"command": 42}), &ctx())
            .await;

        assert!(matches!(result.unwrap_err(), ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_blank_command() {
        let result = ExecuteCommandTool
            .execute(serde_json::json!({"command": "   "}), &ctx())
            .await;

        assert!(matches!(result.unwrap_err(), ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_missing_working_directory_is_error() {
        let result = ExecuteCommandTool
            .execute(
                serde_json::json!({
                    "command": "echo test",
                    "working_directory": "/path/does/not/exist"
                }),
                &ctx(),
            )
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ToolError::WorkingDirectory(ExecutorError::WorkingDirectoryNotFound { .. })
        ));
        assert!(err.to_string().contains("does not exist"));
        assert!(err.is_caller_error());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("test.txt"), "X").unwrap();

        let result = ExecuteCommandTool
            .execute(
                serde_json::json!({
                    "command": "cat test.txt",
                    "working_directory": dir.path().to_str().unwrap()
                }),
                &ctx(),
            )
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.text.ends_with("\n\nOutput:\nX"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_legacy_working_directory_key() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("legacy.txt"), "from legacy key").unwrap();

        let result = ExecuteCommandTool
            .execute(
                serde_json::json!({
                    "command": "cat legacy.txt",
                    "working directory": dir.path().to_str().unwrap()
                }),
                &ctx(),
            )
            .await
            .unwrap();

        assert!(result.text.contains("from legacy key"));
    }
}
