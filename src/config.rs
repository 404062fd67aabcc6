//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// MCP server for creating, editing and checking LaTeX files.
#[derive(Parser, Debug, Clone)]
#[command(name = "latex-mcp-server")]
#[command(version, about)]
pub struct Cli {
    /// Base path for LaTeX files (default: current directory)
    #[arg(long, default_value = ".")]
    pub base_path: PathBuf,
}
