//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use readscope_core::config::Config;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{debug, instrument};

use crate::server::ScorerServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all logging must stay on stderr or in
/// the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    debug!("starting MCP server on stdio");

    let server = ScorerServer::new(config.analysis_options(), config.input_limit());
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;

    tracing::info!("MCP server ready");
    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;
    tracing::info!("MCP server stopped");
    Ok(())
}
