//! LaTeX files exposed as MCP resources.

use url::Url;

use crate::error::{LatexServerError, Result};
use crate::paths::PathResolver;
use crate::tools::{collect_tex_files, is_tex_file};

/// MIME type reported for LaTeX sources.
pub const TEX_MIME_TYPE: &str = "text/x-tex";

/// A `.tex` file under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexResource {
    /// `file://` URI of the file.
    pub uri: String,
    /// Path relative to the base directory.
    pub name: String,
    pub description: String,
}

/// Enumerate every `.tex` file below the base directory.
pub fn list_tex_resources(resolver: &PathResolver) -> Vec<TexResource> {
    let paths = collect_tex_files(resolver.base(), usize::MAX);

    paths
        .into_iter()
        .filter_map(|path| {
            let uri = Url::from_file_path(&path).ok()?;
            let name = resolver.display_relative(&path);
            Some(TexResource {
                uri: uri.to_string(),
                description: format!("LaTeX file: {}", name),
                name,
            })
        })
        .collect()
}

/// Read a `.tex` resource by its `file://` URI.
pub fn read_tex_resource(resolver: &PathResolver, uri: &str) -> Result<String> {
    let url = Url::parse(uri).map_err(|_| LatexServerError::UnsupportedUri(uri.to_string()))?;
    if url.scheme() != "file" {
        return Err(LatexServerError::UnsupportedUri(uri.to_string()));
    }
    let path = url
        .to_file_path()
        .map_err(|_| LatexServerError::UnsupportedUri(uri.to_string()))?;

    let path = resolver.resolve(&path.to_string_lossy())?;
    if !is_tex_file(&path) || !path.is_file() {
        return Err(LatexServerError::NotLatexFile(path));
    }

    Ok(std::fs::read_to_string(&path)?)
}
