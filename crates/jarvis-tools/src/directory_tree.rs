//! Directory tree tool — recursive JSON view of a directory.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::paths::existing_path;
use crate::{BuiltinTool, ToolContext, ToolError, ToolOutput, ToolResult, required_str};

/// Built-in tool that renders a directory hierarchy as JSON.
pub struct DirectoryTreeTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum NodeKind {
    File,
    Directory,
}

#[derive(Debug, Serialize)]
struct TreeNode {
    name: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

#[async_trait::async_trait]
impl BuiltinTool for DirectoryTreeTool {
    fn name(&self) -> &'static str {
        "directory_tree"
    }

    fn description(&self) -> &'static str {
        "Get a recursive tree view of files and directories as a JSON structure"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path for the directory to generate tree from"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let root = existing_path(required_str(&args, "path")?, ctx)?;

        let tree = tokio::task::spawn_blocking(move || build_tree(&root))
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Task join failed: {e}")))??;

        Ok(ToolOutput::text(serde_json::to_string_pretty(&tree)?))
    }
}

fn build_tree(path: &Path) -> Result<TreeNode, ToolError> {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );

    // Links are reported as leaves and never followed.
    let meta = std::fs::symlink_metadata(path)?;
    if !meta.is_dir() {
        return Ok(TreeNode {
            name,
            kind: NodeKind::File,
            children: Vec::new(),
        });
    }

    let mut entries: Vec<_> = std::fs::read_dir(path)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let children = entries
        .iter()
        .map(|entry| build_tree(&entry.path()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TreeNode {
        name,
        kind: NodeKind::Directory,
        children,
    })
}
