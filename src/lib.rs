//! LaTeX MCP Server library.
//!
//! This library provides an MCP server that creates, edits, reads, lists,
//! validates and outlines LaTeX source files below a base directory.

pub mod config;
pub mod error;
pub mod latex;
pub mod paths;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{LatexServerError, Result};
pub use paths::PathResolver;
pub use server::LatexServer;
