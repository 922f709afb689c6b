//! MCP server error types.

use thiserror::Error;

/// Errors raised while running the MCP server.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// The MCP handshake with the client failed.
    #[error("MCP initialization failed: {0}")]
    InitializationFailed(String),

    /// The service task ended abnormally.
    #[error("MCP transport error: {0}")]
    Transport(String),
}

/// Result type for MCP server operations.
pub type McpServerResult<T> = Result<T, McpServerError>;
