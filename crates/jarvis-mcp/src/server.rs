//! `impl rmcp::ServerHandler for JarvisServer`.
//!
//! Advertises the registered tools and routes `tools/call` requests to them.

use std::sync::Arc;

use jarvis_tools::{ToolContext, ToolRegistry};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServiceExt};
use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::convert::{arguments_to_value, error_to_error_data, output_to_result, tool_from_definition};
use crate::error::{McpServerError, McpServerResult};

/// Identity reported to clients during initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Optional usage instructions.
    pub instructions: Option<String>,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: "jarvis-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// MCP server backed by a [`ToolRegistry`].
#[derive(Clone)]
pub struct JarvisServer {
    registry: Arc<ToolRegistry>,
    ctx: ToolContext,
    identity: ServerIdentity,
}

impl JarvisServer {
    /// Create a server over the given tools.
    #[must_use]
    pub fn new(registry: ToolRegistry, ctx: ToolContext, identity: ServerIdentity) -> Self {
        Self {
            registry: Arc::new(registry),
            ctx,
            identity,
        }
    }

    /// Names of the tools this server exposes, sorted.
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Run one tool and map its outcome onto the protocol.
    ///
    /// Rejected requests (unknown tool, bad arguments, bad working directory)
    /// become JSON-RPC errors. A command that ran and failed is a normal
    /// result with `isError` set.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorData`] when the request is rejected or the host fails.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
        let Some(tool) = self.registry.get(name) else {
            warn!(tool = name, "Unknown tool requested");
            return Err(ErrorData::invalid_params(format!("Unknown tool: {name}"), None));
        };

        match tool.execute(args, &self.ctx).await {
            Ok(output) => {
                debug!(is_error = output.is_error, "Tool completed");
                Ok(output_to_result(output))
            },
            Err(e) => {
                warn!(error = %e, "Tool rejected request");
                Err(error_to_error_data(&e))
            },
        }
    }

    /// Serve this handler over stdin/stdout until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the handshake fails or the service task aborts.
    pub async fn serve_stdio(self) -> McpServerResult<()> {
        let tool_count = self.registry.names().len();
        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| McpServerError::InitializationFailed(e.to_string()))?;
        info!(tool_count, "MCP server ready on stdio");

        let reason = service
            .waiting()
            .await
            .map_err(|e| McpServerError::Transport(e.to_string()))?;
        info!(?reason, "MCP server stopped");
        Ok(())
    }
}

impl rmcp::ServerHandler for JarvisServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.identity.name.clone(),
                title: None,
                version: self.identity.version.clone(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: self.identity.instructions.clone(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self
            .registry
            .definitions()
            .into_iter()
            .map(tool_from_definition)
            .collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name.to_string();
        let args = arguments_to_value(request.arguments);
        let span = info_span!("tool_call", tool = %name);
        self.dispatch(&name, args).instrument(span).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarvis_tools::CommandExecutor;
    use rmcp::ServerHandler;
    use rmcp::model::{ErrorCode, RawContent};

    fn server() -> JarvisServer {
        JarvisServer::new(
            ToolRegistry::with_defaults(),
            ToolContext::new(None, CommandExecutor::for_host()),
            ServerIdentity::default(),
        )
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &*result.content[0] {
            RawContent::Text(t) => &t.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "jarvis-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_instructions_forwarded() {
        let identity = ServerIdentity {
            instructions: Some("Local shell access".to_string()),
            ..ServerIdentity::default()
        };
        let server = JarvisServer::new(
            ToolRegistry::with_defaults(),
            ToolContext::new(None, CommandExecutor::for_host()),
            identity,
        );
        assert_eq!(server.get_info().instructions.as_deref(), Some("Local shell access"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dispatch_success() {
        let result = server()
            .dispatch("execute_command", serde_json::json!({"command": "echo hi"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "Command executed successfully: echo hi\n\nOutput:\nhi\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dispatch_command_failure_is_result() {
        let result = server()
            .dispatch("execute_command", serde_json::json!({"command": "exit 2"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Command failed: exit 2"));
    }

    #[tokio::test]
    async fn test_dispatch_bad_working_directory_is_error() {
        let err = server()
            .dispatch(
                "execute_command",
                serde_json::json!({
                    "command": "echo never",
                    "working_directory": "/path/does/not/exist"
                }),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Path '/path/does/not/exist' does not exist"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let err = server()
            .dispatch("teleport", serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("teleport"));
    }

    #[tokio::test]
    async fn test_dispatch_missing_argument() {
        let err = server()
            .dispatch("read_file", serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_disabled_tool_is_unknown() {
        let mut registry = ToolRegistry::with_defaults();
        registry.remove_all(&["execute_command".to_string()]);
        let server = JarvisServer::new(
            registry,
            ToolContext::new(None, CommandExecutor::for_host()),
            ServerIdentity::default(),
        );

        assert!(!server.tool_names().contains(&"execute_command"));
        let err = server
            .dispatch("execute_command", serde_json::json!({"command": "echo hi"}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
