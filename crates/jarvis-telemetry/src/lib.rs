//! Jarvis Telemetry - structured logging for the jarvis MCP server.
//!
//! stdout carries protocol frames when serving over stdio, so logs default to
//! stderr and can be redirected to rolling files.
//!
//! # Example
//!
//! ```rust,no_run
//! use jarvis_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), jarvis_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("jarvis_tools=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileLogConfig, FileRotation, LogConfig, LogFormat, LogTarget, setup_logging,
};
