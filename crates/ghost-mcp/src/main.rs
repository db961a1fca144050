//! ghost-mcp
//!
//! MCP server over stdio exposing the Ghost Admin API. Stdout carries the
//! protocol; all logging goes to stderr.

use anyhow::Context;
use clap::Parser;
use futures::stream::StreamExt;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{error, info};

use ghost_mcp::{ConfigOverrides, GhostMcpServer, GhostTools, ServerConfig, ToolCatalog};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigOverrides,
}

/// Initializes structured logging on stderr.
///
/// Supports two output formats via `GHOST_MCP_LOG_FORMAT`:
/// - `json`: Machine-readable JSON logs
/// - `pretty`: Human-readable formatted logs (default)
///
/// Log level is controlled via `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let format = std::env::var("GHOST_MCP_LOG_FORMAT")
        .unwrap_or_else(|_| "pretty".to_string())
        .to_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ghost_mcp=info,ghost_client=info"));

    match format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    info!("Starting ghost-mcp server");

    let config = ServerConfig::load(&cli.config).inspect_err(|e| {
        error!("Failed to load configuration: {e}");
    })?;

    let client = config
        .build_client()
        .context("Invalid Ghost client configuration")?;
    info!(api_root = client.api_root(), "Ghost client configured");

    let server = GhostMcpServer::new(GhostTools::new(client));
    info!("Registered {} tool(s)", ToolCatalog::global().len());

    let mut signals = Signals::new([SIGTERM, SIGINT])?;
    let signals_handle = signals.handle();

    tokio::select! {
        result = server.serve_stdio() => {
            if let Err(e) = result {
                error!("MCP service failed: {e}");
                signals_handle.close();
                return Err(e.into());
            }
        }
        Some(signal) = signals.next() => {
            match signal {
                SIGINT => info!("Received SIGINT, shutting down ghost-mcp server"),
                SIGTERM => info!("Received SIGTERM, shutting down ghost-mcp server"),
                _ => {}
            }
        }
    }

    signals_handle.close();
    info!("ghost-mcp shutdown complete");

    Ok(())
}
