//! Write file tool — writes content to a file, creating parent directories as needed.

use crate::paths::expand_path;
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};
use serde_json::Value;

/// Built-in tool for writing files.
pub struct WriteFileTool;

#[async_trait::async_trait]
impl BuiltinTool for WriteFileTool {
    fn name(&self) -> &'static str {
        "write_file"
    }

    fn description(&self) -> &'static str {
        "Write file, given the path"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path for the file name to write"
                },
                "content": {
                    "type": "string",
                    "description": "Content to write to the file"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let raw_path = required_str(&args, "path")?;
        let content = required_str(&args, "content")?;
        let path = expand_path(raw_path, ctx)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(ToolOutput::text("File written successfully"))
    }
}
