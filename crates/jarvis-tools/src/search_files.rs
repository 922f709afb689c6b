//! Search files tool — finds entries whose name contains a substring.

use std::fmt::Write;

use crate::paths::existing_path;
use crate::{BuiltinTool, ToolContext, ToolError, ToolOutput, ToolResult, required_str};
use serde_json::Value;
use walkdir::WalkDir;

/// Built-in tool for locating files and directories by name.
pub struct SearchFilesTool;

#[async_trait::async_trait]
impl BuiltinTool for SearchFilesTool {
    fn name(&self) -> &'static str {
        "search_files"
    }

    fn description(&self) -> &'static str {
        "Perform a recursive search to locate files and directories that match a specified pattern"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The root directory path where the search will begin"
                },
                "pattern": {
                    "type": "string",
                    "description": "The pattern used to identify matching file and directory names"
                }
            },
            "required": ["path", "pattern"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let root = existing_path(required_str(&args, "path")?, ctx)?;
        let pattern = required_str(&args, "pattern")?.to_string();

        let needle = pattern.clone();
        let matches = tokio::task::spawn_blocking(move || find_matches(&root, &needle))
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Task join failed: {e}")))??;

        if matches.is_empty() {
            return Ok(ToolOutput::text("No files matching the pattern were found"));
        }

        let mut output = format!("Files matching pattern '{pattern}':");
        for found in &matches {
            let _ = write!(output, "\n{found}");
        }
        Ok(ToolOutput::text(output))
    }
}

/// Walk `root` and collect paths (relative to `root`) whose final component contains `needle`.
fn find_matches(root: &std::path::Path, needle: &str) -> Result<Vec<String>, ToolError> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        if !entry.file_name().to_string_lossy().contains(needle) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        matches.push(rel.display().to_string());
    }

    Ok(matches)
}
