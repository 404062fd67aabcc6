//! Document creation from a template.

use std::fmt;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::Result;
use crate::latex::{self, TemplateSpec};
use crate::paths::PathResolver;

// ============== Create LaTeX File ==============

/// Parameters for creating a LaTeX file.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLatexFileParams {
    /// Path where the LaTeX file should be created.
    pub file_path: String,
    /// Document template settings.
    #[serde(flatten)]
    pub template: TemplateSpec,
}

/// Result of creating a LaTeX file.
#[derive(Debug)]
pub struct CreateLatexFileResult {
    /// Resolved path of the written file.
    pub path: PathBuf,
    /// Full text that was written.
    pub content: String,
}

impl fmt::Display for CreateLatexFileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully created LaTeX file: {}\n\nContent:\n{}",
            self.path.display(),
            self.content
        )
    }
}

/// Create a new LaTeX file, overwriting any existing one.
pub fn create_latex_file(
    resolver: &PathResolver,
    params: CreateLatexFileParams,
) -> Result<CreateLatexFileResult> {
    let path = resolver.resolve(&params.file_path)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = latex::build(&params.template);
    std::fs::write(&path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "created LaTeX file");

    Ok(CreateLatexFileResult { path, content })
}
