//! Daemon entry point for the shadcn-vue MCP server.
//!
//! Loads configuration from flags and the environment, builds the component
//! control plane, and serves MCP over stdio and/or streamable HTTP.

mod config;
mod control;

use std::error::Error;

use shadcn_vue_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, McpdConfig};
use crate::control::build_control_plane;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = McpdConfig::from_args()?;
    init_tracing(config.log_format)?;

    let control = build_control_plane(&config)?;
    let _sweeper = control.cache().clone().spawn_sweeper();

    info!(
        stdio = config.enable_stdio,
        http = config.http_serve,
        library_id = %config.library_id,
        "starting shadcn-vue-mcpd"
    );

    let http_config = McpHttpServerConfig::new(config.http_addr);
    match (config.enable_stdio, config.http_serve) {
        (true, true) => {
            // Either transport ending shuts the daemon down.
            tokio::select! {
                result = serve_stdio(control.clone()) => result?,
                result = serve_streamable_http(control, http_config) => result?,
            }
        }
        (false, true) => serve_streamable_http(control, http_config).await?,
        _ => serve_stdio(control).await?,
    }
    Ok(())
}

/// Logs go to stderr; stdout carries the stdio transport.
fn init_tracing(format: LogFormat) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("shadcn_vue=info"))?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }
    Ok(())
}
