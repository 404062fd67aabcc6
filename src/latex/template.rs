//! Document templates for newly created files.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Packages every generated document loads before the caller's own.
const DEFAULT_PACKAGES: [&str; 3] = ["inputenc", "fontenc", "babel"];

/// LaTeX document class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Article,
    Report,
    Book,
    Letter,
    Beamer,
    Minimal,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Article => "article",
            DocumentType::Report => "report",
            DocumentType::Book => "book",
            DocumentType::Letter => "letter",
            DocumentType::Beamer => "beamer",
            DocumentType::Minimal => "minimal",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters describing a new document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateSpec {
    /// Type of LaTeX document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_type: DocumentType,
    /// Document title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Document author.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Document date (use \today for current date).
    #[serde(default = "default_date", deserialize_with = "null_as_default")]
    pub date: String,
    /// Main content of the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// List of LaTeX packages to include.
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<String>,
    /// Page geometry settings (e.g., 'margin=1in').
    #[serde(default, deserialize_with = "null_as_default")]
    pub geometry: String,
}

fn default_date() -> String {
    "\\today".to_string()
}

/// Treat an explicit `null` the same as an empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for TemplateSpec {
    fn default() -> Self {
        Self {
            document_type: DocumentType::default(),
            title: String::new(),
            author: String::new(),
            date: default_date(),
            content: String::new(),
            packages: Vec::new(),
            geometry: String::new(),
        }
    }
}

fn usepackage(name: &str) -> String {
    match name {
        "inputenc" => "\\usepackage[utf8]{inputenc}".to_string(),
        "fontenc" => "\\usepackage[T1]{fontenc}".to_string(),
        "babel" => "\\usepackage[english]{babel}".to_string(),
        other => format!("\\usepackage{{{}}}", other),
    }
}

/// Assemble the full document text.
///
/// Nothing is escaped: title, author and content are inserted verbatim.
pub fn build(spec: &TemplateSpec) -> String {
    let mut parts = vec![format!("\\documentclass{{{}}}", spec.document_type)];

    if !spec.geometry.is_empty() {
        parts.push(format!("\\usepackage[{}]{{geometry}}", spec.geometry));
    }

    let packages = DEFAULT_PACKAGES
        .iter()
        .copied()
        .chain(spec.packages.iter().map(String::as_str));
    parts.extend(packages.map(usepackage));

    if !spec.title.is_empty() {
        parts.push(format!("\\title{{{}}}", spec.title));
    }
    if !spec.author.is_empty() {
        parts.push(format!("\\author{{{}}}", spec.author));
    }
    if !spec.date.is_empty() {
        parts.push(format!("\\date{{{}}}", spec.date));
    }

    parts.push("\\begin{document}".to_string());

    if !spec.title.is_empty() {
        parts.push("\\maketitle".to_string());
    }

    if spec.content.is_empty() {
        parts.push("% Your content here".to_string());
    } else {
        parts.push(spec.content.clone());
    }

    parts.push("\\end{document}".to_string());

    parts.join("\n\n")
}
