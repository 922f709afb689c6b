//! List directory tool — one line per entry, tagged `[DIR]` or `[FILE]`.

use crate::paths::existing_path;
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};
use serde_json::Value;

/// Built-in tool for listing directory contents.
pub struct ListDirectoryTool;

#[async_trait::async_trait]
impl BuiltinTool for ListDirectoryTool {
    fn name(&self) -> &'static str {
        "list_directory"
    }

    fn description(&self) -> &'static str {
        "Get a detailed listing of all files and directories in a specified path"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path for the directory to list"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let path = existing_path(required_str(&args, "path")?, ctx)?;

        let mut entries: Vec<(String, bool)> = Vec::new();
        let mut dir = tokio::fs::read_dir(&path).await?;
        while let Some(entry) = dir.next_entry().await? {
            let is_dir = entry.file_type().await?.is_dir();
            entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
        }
        entries.sort();

        let lines: Vec<String> = entries
            .into_iter()
            .map(|(name, is_dir)| {
                let prefix = if is_dir { "[DIR]" } else { "[FILE]" };
                format!("{prefix} {name}")
            })
            .collect();

        Ok(ToolOutput::text(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandExecutor, ToolError};
    use tempfile::TempDir;

    fn ctx() -> ToolContext {
        ToolContext::new(None, CommandExecutor::for_host())
    }

    #[tokio::test]
    async fn test_list_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": dir.path().to_str().unwrap()}), &ctx())
            .await
            .unwrap();

        assert_eq!(result.text, "[FILE] a.txt\n[FILE] b.txt\n[DIR] subdir");
    }

    #[tokio::test]
    async fn test_list_empty_directory() {
        let dir = TempDir::new().unwrap();
        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": dir.path().to_str().unwrap()}), &ctx())
            .await
            .unwrap();
        assert!(result.text.is_empty());
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": "/tmp/jarvis_no_such_dir_9876"}), &ctx())
            .await;
        assert!(matches!(result.unwrap_err(), ToolError::PathNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let result = ListDirectoryTool
            .execute(serde_json::json!({"path": file.to_str().unwrap()}), &ctx())
            .await;
        assert!(matches!(result.unwrap_err(), ToolError::Io(_)));
    }
}
