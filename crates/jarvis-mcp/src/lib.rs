//! Jarvis MCP - the Model Context Protocol boundary for the jarvis tools.
//!
//! Wraps the official `rmcp` SDK: a [`JarvisServer`] advertises every tool in
//! a [`jarvis_tools::ToolRegistry`] and routes `tools/call` requests to it.
//!
//! Outcomes map onto the protocol in two classes:
//! - a request the server rejects (unknown tool, missing argument, bad
//!   working directory) is a JSON-RPC error;
//! - a command that ran and failed is a normal result flagged `isError`,
//!   carrying the same text a success would.
//!
//! # Example
//!
//! ```rust,no_run
//! use jarvis_mcp::{JarvisServer, ServerIdentity};
//! use jarvis_tools::{ToolContext, ToolRegistry};
//!
//! # async fn example() -> Result<(), jarvis_mcp::McpServerError> {
//! let server = JarvisServer::new(
//!     ToolRegistry::with_defaults(),
//!     ToolContext::from_process(),
//!     ServerIdentity::default(),
//! );
//! server.serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

mod convert;
mod error;
mod server;

pub use error::{McpServerError, McpServerResult};
pub use server::{JarvisServer, ServerIdentity};
