//! Error types for the LaTeX MCP server.

use std::path::PathBuf;

use thiserror::Error;

use crate::latex::EditOperation;

/// Errors that can occur in the LaTeX MCP server.
#[derive(Debug, Error)]
pub enum LatexServerError {
    /// The resolved path lies outside the allowed root.
    #[error("Path {path} is outside the allowed base path ({root})")]
    PathEscape { path: String, root: PathBuf },

    /// The target file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The target directory does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A resource read targeted something other than an existing `.tex` file.
    #[error("File not found or not a LaTeX file: {}", .0.display())]
    NotLatexFile(PathBuf),

    /// A resource URI with a scheme other than `file`.
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedUri(String),

    /// An edit operation was missing the argument it needs.
    #[error("{field} is required for {operation} operation")]
    MissingField {
        field: &'static str,
        operation: EditOperation,
    },

    /// Unrecognized edit operation name.
    #[error(
        "Unknown operation: {0} (valid operations: replace, insert_before, insert_after, append, prepend)"
    )]
    UnknownOperation(String),

    /// Unrecognized tool name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments did not match the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for LaTeX MCP server operations.
pub type Result<T> = std::result::Result<T, LatexServerError>;
