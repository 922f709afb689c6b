//! File info tool — reports metadata for a single path as JSON.

use std::fs::Metadata;

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::paths::existing_path;
use crate::{BuiltinTool, ToolContext, ToolOutput, ToolResult, required_str};

/// Built-in tool that describes a file or directory.
pub struct FileInfoTool;

/// Metadata document returned by `get_file_info`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct FileInfo {
    name: String,
    size: u64,
    mode: String,
    mod_time: String,
    is_dir: bool,
}

#[async_trait::async_trait]
impl BuiltinTool for FileInfoTool {
    fn name(&self) -> &'static str {
        "get_file_info"
    }

    fn description(&self) -> &'static str {
        "Retrieve comprehensive metadata and attributes for a specified file or directory"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The absolute or relative path of the file or directory to retrieve metadata for"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> ToolResult {
        let path = existing_path(required_str(&args, "path")?, ctx)?;
        let meta = tokio::fs::metadata(&path).await?;

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let mod_time = meta
            .modified()
            .map(|t| DateTime::<Local>::from(t).to_rfc3339())
            .unwrap_or_default();

        let info = FileInfo {
            name,
            size: meta.len(),
            mode: mode_string(&meta),
            mod_time,
            is_dir: meta.is_dir(),
        };

        Ok(ToolOutput::text(serde_json::to_string_pretty(&info)?))
    }
}

/// `ls -l` style permission string, e.g. `drwxr-xr-x`.
#[cfg(unix)]
fn mode_string(meta: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    let mode = meta.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push(type_char(meta));
    for (bit, c) in BITS {
        out.push(if mode & bit == 0 { '-' } else { c });
    }
    out
}

#[cfg(not(unix))]
fn mode_string(meta: &Metadata) -> String {
    let write = if meta.permissions().readonly() { '-' } else { 'w' };
    format!("{}r{write}-r{write}-r{write}-", type_char(meta))
}

fn type_char(meta: &Metadata) -> char {
    if meta.is_dir() { 'd' } else { '-' }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandExecutor, ToolError};
    use tempfile::TempDir;

    fn ctx() -> ToolContext {
        ToolContext::new(None, CommandExecutor::for_host())
    }

    async fn info_for(path: &std::path::Path) -> Value {
        let out = FileInfoTool
            .execute(serde_json::json!({"path": path.to_str().unwrap()}), &ctx())
            .await
            .unwrap();
        serde_json::from_str(&out.text).unwrap()
    }

    #[tokio::test]
    async fn test_file_info_for_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"12345").unwrap();

        let info = info_for(&path).await;
        assert_eq!(info["Name"], "data.bin");
        assert_eq!(info["Size"], 5);
        assert_eq!(info["IsDir"], false);
        assert!(info["Mode"].as_str().unwrap().starts_with('-'));
        assert!(DateTime::parse_from_rfc3339(info["ModTime"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_file_info_for_directory() {
        let dir = TempDir::new().unwrap();
        let info = info_for(dir.path()).await;
        assert_eq!(info["IsDir"], true);
        assert!(info["Mode"].as_str().unwrap().starts_with('d'));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_mode_string_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.sh");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o754)).unwrap();

        let info = info_for(&path).await;
        assert_eq!(info["Mode"], "-rwxr-xr--");
    }

    #[tokio::test]
    async fn test_file_info_missing() {
        let result = FileInfoTool
            .execute(serde_json::json!({"path": "/tmp/jarvis_missing_info_4242"}), &ctx())
            .await;
        assert!(matches!(result.unwrap_err(), ToolError::PathNotFound(_)));
    }
}
