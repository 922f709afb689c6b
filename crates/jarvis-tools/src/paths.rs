//! Path resolution shared by the filesystem tools.

use std::path::{Path, PathBuf};

use crate::{ToolContext, ToolError};

/// Expand a leading `~` against the context home directory and make the
/// result absolute against the current directory. The path need not exist.
pub(crate) fn expand_path(raw: &str, ctx: &ToolContext) -> Result<PathBuf, ToolError> {
    if raw.is_empty() {
        return Err(ToolError::InvalidArguments("path must not be empty".into()));
    }

    let home_relative = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => Some(rest),
        _ => None,
    };

    let expanded = match home_relative {
        Some(rest) => {
            let home = ctx.home_dir.as_deref().ok_or_else(|| {
                ToolError::ExecutionFailed("could not determine home directory".into())
            })?;
            home.join(rest.trim_start_matches(['/', '\\']))
        },
        None => PathBuf::from(raw),
    };

    Ok(std::path::absolute(&expanded)?)
}

/// Like [`expand_path`], but the path must exist.
pub(crate) fn existing_path(raw: &str, ctx: &ToolContext) -> Result<PathBuf, ToolError> {
    let path = expand_path(raw, ctx)?;
    if !exists(&path) {
        return Err(ToolError::PathNotFound(path.display().to_string()));
    }
    Ok(path)
}

fn exists(path: &Path) -> bool {
    // symlink_metadata so a dangling link still counts as present
    std::fs::symlink_metadata(path).is_ok()
}
