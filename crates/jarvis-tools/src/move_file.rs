//! Move file tool — renames a file or directory.

use crate::paths::{existing_path, expand_path};
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};
use serde_json::Value;

/// Built-in tool for moving or renaming files and directories.
pub struct MoveFileTool;

#[async_trait::async_trait]
impl BuiltinTool for MoveFileTool {
    fn name(&self) -> &'static str {
        "move_file"
    }

    fn description(&self) -> &'static str {
        "Move or rename files and directories to a specified location"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "source": {
                    "type": "string",
                    "description": "The full path of the file or directory to be moved or renamed"
                },
                "destination": {
                    "type": "string",
                    "description": "The target path where the file or directory should be moved or renamed to"
                }
            },
            "required": ["source", "destination"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let source = required_str(&args, "source")?;
        let destination = required_str(&args, "destination")?;

        let from = existing_path(source, ctx)?;
        let to = expand_path(destination, ctx)?;
        tokio::fs::rename(&from, &to).await?;

        Ok(ToolOutput::text(format!(
            "Successfully moved file from {source} to {destination}"
        )))
    }
}
