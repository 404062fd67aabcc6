//! Reading single files and listing directories.

use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{LatexServerError, Result};
use crate::paths::PathResolver;
use crate::tools::read_existing;

/// Whether a path has the `.tex` extension.
pub fn is_tex_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tex")
}

/// Collect `.tex` files below `root`, sorted by path.
///
/// Symlinked files are included; symlinked directories are not descended
/// into. Entries that cannot be read are logged and skipped.
pub fn collect_tex_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| is_tex_file(entry.path()) && entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();
    paths
}

// ============== Read LaTeX File ==============

/// Parameters for reading a LaTeX file.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadLatexFileParams {
    /// Path to the LaTeX file to read.
    pub file_path: String,
}

/// Result of reading a LaTeX file.
#[derive(Debug)]
pub struct ReadLatexFileResult {
    pub path: PathBuf,
    pub content: String,
}

impl fmt::Display for ReadLatexFileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contents of {}:\n\n{}", self.path.display(), self.content)
    }
}

/// Read the contents of a LaTeX file.
pub fn read_latex_file(
    resolver: &PathResolver,
    params: ReadLatexFileParams,
) -> Result<ReadLatexFileResult> {
    let path = resolver.resolve(&params.file_path)?;
    let content = read_existing(&path)?;

    Ok(ReadLatexFileResult { path, content })
}

// ============== List LaTeX Files ==============

/// Parameters for listing LaTeX files.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListLatexFilesParams {
    /// Directory path to search for LaTeX files.
    #[serde(default = "default_directory")]
    pub directory_path: String,
    /// Whether to search recursively in subdirectories.
    #[serde(default)]
    pub recursive: bool,
}

fn default_directory() -> String {
    ".".to_string()
}

impl Default for ListLatexFilesParams {
    fn default() -> Self {
        Self {
            directory_path: default_directory(),
            recursive: false,
        }
    }
}

/// A LaTeX file found in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexFileEntry {
    /// Path relative to the base directory, or absolute if outside it.
    pub display_path: String,
    /// File size in bytes.
    pub size: u64,
}

/// Result of listing LaTeX files.
#[derive(Debug)]
pub struct ListLatexFilesResult {
    /// Directory that was searched.
    pub directory: PathBuf,
    /// Files found, sorted by path.
    pub files: Vec<LatexFileEntry>,
}

impl fmt::Display for ListLatexFilesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files.is_empty() {
            return write!(f, "No LaTeX files found in {}", self.directory.display());
        }

        write!(f, "LaTeX files in {}:\n\n", self.directory.display())?;
        let lines: Vec<String> = self
            .files
            .iter()
            .map(|file| format!("  {} ({} bytes)", file.display_path, file.size))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// List `.tex` files in a directory, optionally recursing.
pub fn list_latex_files(
    resolver: &PathResolver,
    params: ListLatexFilesParams,
) -> Result<ListLatexFilesResult> {
    let directory = resolver.resolve(&params.directory_path)?;
    if !directory.is_dir() {
        return Err(LatexServerError::DirectoryNotFound(directory));
    }

    let max_depth = if params.recursive { usize::MAX } else { 1 };

    let mut found = Vec::new();
    for path in collect_tex_files(&directory, max_depth) {
        match std::fs::metadata(&path) {
            Ok(metadata) => found.push((path, metadata.len())),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let files = found
        .into_iter()
        .map(|(path, size)| LatexFileEntry {
            display_path: resolver.display_relative(&path),
            size,
        })
        .collect();

    Ok(ListLatexFilesResult { directory, files })
}
