//! Create directory tool.

use crate::paths::expand_path;
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};
use serde_json::Value;

/// Built-in tool that creates a directory (and any missing parents).
pub struct CreateDirectoryTool;

#[async_trait::async_trait]
impl BuiltinTool for CreateDirectoryTool {
    fn name(&self) -> &'static str {
        "create_directory"
    }

    fn description(&self) -> &'static str {
        "Create a new directory or ensure a directory exists"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path for the directory to create"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let raw_path = required_str(&args, "path")?;
        let path = expand_path(raw_path, ctx)?;

        // Fails if a non-directory already sits at `path`.
        tokio::fs::create_dir_all(&path).await?;

        Ok(ToolOutput::text(format!(
            "Successfully created directory {raw_path}"
        )))
    }
}
