//! octolens-mcp: MCP server exposing read-only GitHub repository insight tools.

mod catalog;
mod server;
mod tools;
mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use octolens_gh::config::validate_base_url;
use octolens_gh::consts::{API_URL_ENV_VAR, DEFAULT_TIMEOUT_SECS};
use octolens_gh::{GatewayConfig, GitHubClient};
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::server::OctolensMcpServer;

#[derive(Parser)]
#[command(version, about = "MCP server for GitHub repositories, issues, pull requests, search, and workflows")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  /// Override the GitHub API base URL (e.g. for GitHub Enterprise)
  #[arg(long = "api-url", value_name = "URL", env = API_URL_ENV_VAR, value_parser = validate_base_url)]
  api_url: Option<String>,

  /// Whole-request timeout for upstream calls, in seconds
  #[arg(long = "timeout-secs", value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
  timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr, stdout is reserved for MCP JSON-RPC protocol.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let mut config = GatewayConfig::from_env().with_timeout(Duration::from_secs(cli.timeout_secs));
  if let Some(api_url) = cli.api_url {
    config = config.with_base_url(api_url);
  }

  if !config.is_authenticated() {
    info!("No GitHub token configured, requests are limited to 60 per hour");
  }
  info!("Using GitHub API at {}", config.base_url());

  let github = GitHubClient::new(config).context("Failed to create GitHub client")?;
  let server = OctolensMcpServer::new(github);

  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
