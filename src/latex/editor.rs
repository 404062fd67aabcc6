//! Text edits applied to existing file content.

use std::fmt;
use std::str::FromStr;

use crate::error::{LatexServerError, Result};

/// Supported edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOperation {
    Replace,
    InsertBefore,
    InsertAfter,
    Append,
    Prepend,
}

impl EditOperation {
    pub const ALL: [EditOperation; 5] = [
        EditOperation::Replace,
        EditOperation::InsertBefore,
        EditOperation::InsertAfter,
        EditOperation::Append,
        EditOperation::Prepend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditOperation::Replace => "replace",
            EditOperation::InsertBefore => "insert_before",
            EditOperation::InsertAfter => "insert_after",
            EditOperation::Append => "append",
            EditOperation::Prepend => "prepend",
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditOperation {
    type Err = LatexServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "replace" => Ok(EditOperation::Replace),
            "insert_before" => Ok(EditOperation::InsertBefore),
            "insert_after" => Ok(EditOperation::InsertAfter),
            "append" => Ok(EditOperation::Append),
            "prepend" => Ok(EditOperation::Prepend),
            other => Err(LatexServerError::UnknownOperation(other.to_string())),
        }
    }
}

/// A single edit against a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub operation: EditOperation,
    /// Text to search for. Empty counts as absent.
    pub search_text: Option<String>,
    pub new_text: String,
    /// 1-based line for insertion when no search text is given.
    pub line_number: Option<i64>,
}

impl EditRequest {
    fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|s| !s.is_empty())
    }
}

/// Apply an edit and return the new content.
pub fn apply(content: &str, request: &EditRequest) -> Result<String> {
    let new_text = request.new_text.as_str();

    match request.operation {
        EditOperation::Replace => {
            let search = request.search_text().ok_or(LatexServerError::MissingField {
                field: "search_text",
                operation: request.operation,
            })?;
            Ok(content.replace(search, new_text))
        }
        EditOperation::InsertBefore | EditOperation::InsertAfter => {
            let before = request.operation == EditOperation::InsertBefore;

            if let Some(search) = request.search_text() {
                let replacement = if before {
                    format!("{}\n{}", new_text, search)
                } else {
                    format!("{}\n{}", search, new_text)
                };
                return Ok(content.replace(search, &replacement));
            }

            let mut lines: Vec<&str> = content.lines().collect();
            let index = request
                .line_number
                .filter(|n| *n >= 1 && *n <= lines.len() as i64)
                .map(|n| n as usize)
                .ok_or(LatexServerError::MissingField {
                    field: "search_text or valid line_number",
                    operation: request.operation,
                })?;

            // Rejoining drops any trailing newline.
            let at = if before { index - 1 } else { index };
            lines.insert(at, new_text);
            Ok(lines.join("\n"))
        }
        EditOperation::Append => Ok(format!("{}\n{}", content, new_text)),
        EditOperation::Prepend => Ok(format!("{}\n{}", new_text, content)),
    }
}
