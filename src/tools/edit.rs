//! In-place edits of existing files.

use std::fmt;
use std::path::PathBuf;

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::Result;
use crate::latex::{self, EditOperation, EditRequest};
use crate::paths::PathResolver;
use crate::tools::read_existing;

// ============== Edit LaTeX File ==============

/// Parameters for editing a LaTeX file.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EditLatexFileParams {
    /// Path to the LaTeX file to edit.
    pub file_path: String,
    /// Type of edit operation: "replace", "insert_before", "insert_after", "append", "prepend".
    #[schemars(schema_with = "operation_schema")]
    pub operation: String,
    /// New text to insert or replace with.
    pub new_text: String,
    /// Text to search for (required for replace, insert_before, insert_after).
    #[serde(default)]
    pub search_text: Option<String>,
    /// Line number for insertion (alternative to search_text, 1-based).
    #[serde(default)]
    pub line_number: Option<i64>,
}

/// String schema restricted to the known operation names.
///
/// The field stays a `String`; names are checked by `EditOperation::from_str`.
fn operation_schema(_: &mut SchemaGenerator) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(
            EditOperation::ALL
                .iter()
                .map(|op| op.as_str().into())
                .collect(),
        ),
        ..Default::default()
    }
    .into()
}

impl EditLatexFileParams {
    /// Build the edit request, rejecting unknown operation names.
    pub fn to_request(&self) -> Result<EditRequest> {
        Ok(EditRequest {
            operation: self.operation.parse()?,
            search_text: self.search_text.clone(),
            new_text: self.new_text.clone(),
            line_number: self.line_number,
        })
    }
}

/// Result of editing a LaTeX file.
#[derive(Debug)]
pub struct EditLatexFileResult {
    /// Resolved path of the edited file.
    pub path: PathBuf,
    /// Operation that was applied.
    pub operation: EditOperation,
}

impl fmt::Display for EditLatexFileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully edited LaTeX file: {}\n\nOperation: {}\nFile updated.",
            self.path.display(),
            self.operation
        )
    }
}

/// Apply an edit to a file and write the result back.
pub fn edit_latex_file(
    resolver: &PathResolver,
    params: EditLatexFileParams,
) -> Result<EditLatexFileResult> {
    let path = resolver.resolve(&params.file_path)?;
    let content = read_existing(&path)?;

    let request = params.to_request()?;
    let updated = latex::apply(&content, &request)?;
    std::fs::write(&path, updated)?;
    tracing::debug!(path = %path.display(), operation = %request.operation, "edited LaTeX file");

    Ok(EditLatexFileResult {
        path,
        operation: request.operation,
    })
}
