//! Read file tool — returns the whole file as text.

use crate::paths::existing_path;
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};
use serde_json::Value;

/// Built-in tool for reading files.
pub struct ReadFileTool;

#[async_trait::async_trait]
impl BuiltinTool for ReadFileTool {
    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &'static str {
        "Read file, given the path"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path for the file name to read"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let path = existing_path(required_str(&args, "path")?, ctx)?;
        let raw = tokio::fs::read(&path).await?;
        let content = String::from_utf8_lossy(&raw);

        Ok(ToolOutput::text(format!(
            "File read successfully. Content: {content}"
        )))
    }
}
