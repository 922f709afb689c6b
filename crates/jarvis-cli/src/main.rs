//! Jarvis MCP - local shell and filesystem tools over the Model Context Protocol.
//!
//! `serve` (the default) speaks MCP on stdin/stdout. `tools` and `exec` are
//! for inspecting and trying the tools from a terminal.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use jarvis_mcp::JarvisServer;
use jarvis_tools::{CommandExecutor, CommandRequest, ToolContext};
use tracing::debug;

mod config_bridge;

/// Jarvis - local command execution and filesystem tools for MCP clients
#[derive(Parser)]
#[command(name = "jarvis-mcp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Additional configuration file, merged over ~/.jarvis/config.toml
    #[arg(short, long, global = true, env = "JARVIS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tools over MCP on stdin/stdout (default)
    Serve,

    /// Print the enabled tool definitions as JSON
    Tools,

    /// Run one command through the executor and print the result
    Exec {
        /// Command line, passed verbatim to the platform shell
        command: String,

        /// Directory to run the command in
        #[arg(short = 'd', long)]
        working_directory: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = jarvis_config::Config::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    let config = loaded.config;

    // Set up logging from config, with --verbose override.
    let mut log_config = config_bridge::to_log_config(&config);
    if cli.verbose {
        "debug".clone_into(&mut log_config.level);
    }
    if let Err(e) = jarvis_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }
    for path in &loaded.loaded_files {
        debug!(path = %path.display(), "Using config file");
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let server = JarvisServer::new(
                config_bridge::to_registry(&config),
                ToolContext::from_process(),
                config_bridge::to_identity(&config),
            );
            server.serve_stdio().await?;
        },
        Commands::Tools => {
            let registry = config_bridge::to_registry(&config);
            println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        },
        Commands::Exec {
            command,
            working_directory,
        } => {
            if command.trim().is_empty() {
                bail!("command must not be empty");
            }
            let mut request = CommandRequest::new(command);
            if let Some(dir) = &working_directory {
                request = request.with_working_directory(dir);
            }

            let executor = CommandExecutor::for_host();
            let outcome = tokio::task::spawn_blocking(move || executor.execute(&request))
                .await
                .context("command task panicked")??;

            println!("{}", outcome.formatted_message);
            if !outcome.succeeded {
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
