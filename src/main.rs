//! LaTeX MCP Server entry point.
//!
//! This binary starts the MCP server using STDIO transport.

use clap::Parser;
use latex_mcp_server::config::Cli;
use latex_mcp_server::{LatexServer, PathResolver};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (important for STDIO transport)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "latex_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let resolver = PathResolver::new(&cli.base_path)?;

    tracing::info!(
        base = %resolver.base().display(),
        allowed_root = %resolver.allowed_root().display(),
        "Starting LaTeX MCP Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let server = LatexServer::new(resolver);

    // Serve over STDIO
    let service = server.serve(rmcp::transport::stdio()).await?;

    // Wait for the service to complete
    service.waiting().await?;

    tracing::info!("LaTeX MCP Server stopped");
    Ok(())
}
