//! MCP tool implementations for LaTeX file operations.

pub mod create;
pub mod edit;
pub mod inspect;
pub mod read;

// Re-export common types
pub use create::*;
pub use edit::*;
pub use inspect::*;
pub use read::*;

use std::path::Path;

use crate::error::{LatexServerError, Result};

/// Read a file the tools operate on, failing cleanly if it is missing.
fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LatexServerError::FileNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
