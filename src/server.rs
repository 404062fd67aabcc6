//! MCP server implementation with tool routing.

use rmcp::model::{
    AnnotateAble, CallToolRequestParams, CallToolResult, Content, Implementation,
    InitializeResult, JsonObject, ListResourcesResult, ListToolsResult, PaginatedRequestParams,
    RawResource, ReadResourceRequestParams, ReadResourceResult, Resource, ResourceContents,
    ServerCapabilities, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

use crate::error::{LatexServerError, Result};
use crate::paths::PathResolver;
use crate::resources;
use crate::tools;

/// LaTeX MCP Server.
///
/// Holds only the path configuration; every call reads the filesystem
/// afresh.
#[derive(Debug, Clone)]
pub struct LatexServer {
    resolver: PathResolver,
}

impl LatexServer {
    /// Create a server rooted at the resolver's base directory.
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn make_tool<T: JsonSchema>(name: &str, description: &str) -> Tool {
        let schema = serde_json::to_value(schemars::schema_for!(T)).unwrap_or_default();
        Tool {
            name: Cow::Owned(name.to_string()),
            title: None,
            description: Some(Cow::Owned(description.to_string())),
            input_schema: Arc::new(serde_json::from_value(schema).unwrap_or_default()),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }
    }

    /// All tools this server exposes.
    pub fn tools() -> Vec<Tool> {
        vec![
            Self::make_tool::<tools::CreateLatexFileParams>(
                "create_latex_file",
                "Create a new LaTeX document with specified content and structure. Missing parent directories are created and an existing file is overwritten.",
            ),
            Self::make_tool::<tools::EditLatexFileParams>(
                "edit_latex_file",
                "Edit an existing LaTeX file by replacing content or inserting new content. replace and search-based inserts affect every occurrence of search_text.",
            ),
            Self::make_tool::<tools::ReadLatexFileParams>(
                "read_latex_file",
                "Read and return the contents of a LaTeX file",
            ),
            Self::make_tool::<tools::ListLatexFilesParams>(
                "list_latex_files",
                "List all LaTeX files in a directory",
            ),
            Self::make_tool::<tools::ValidateLatexParams>(
                "validate_latex",
                "Perform basic LaTeX syntax validation on a file",
            ),
            Self::make_tool::<tools::GetLatexStructureParams>(
                "get_latex_structure",
                "Extract the structure of a LaTeX document (sections, subsections, etc.)",
            ),
        ]
    }

    /// Run a tool by name and render its text reply.
    pub fn dispatch(&self, name: &str, args: JsonObject) -> Result<String> {
        let resolver = &self.resolver;
        match name {
            "create_latex_file" => {
                tools::create_latex_file(resolver, parse(args)?).map(|r| r.to_string())
            }
            "edit_latex_file" => {
                tools::edit_latex_file(resolver, parse(args)?).map(|r| r.to_string())
            }
            "read_latex_file" => {
                tools::read_latex_file(resolver, parse(args)?).map(|r| r.to_string())
            }
            "list_latex_files" => {
                tools::list_latex_files(resolver, parse(args)?).map(|r| r.to_string())
            }
            "validate_latex" => {
                tools::validate_latex(resolver, parse(args)?).map(|r| r.to_string())
            }
            "get_latex_structure" => {
                tools::get_latex_structure(resolver, parse(args)?).map(|r| r.to_string())
            }
            _ => Err(LatexServerError::UnknownTool(name.to_string())),
        }
    }

    /// Run a tool and fold any failure into an `Error: ` reply.
    pub fn call(&self, name: &str, args: JsonObject) -> CallToolResult {
        tracing::debug!(tool = name, "call_tool");
        match self.dispatch(name, args) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                tracing::warn!(tool = name, "Tool failed: {}", e);
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    /// Every `.tex` file under the base directory as an MCP resource.
    pub fn resource_list(&self) -> Vec<Resource> {
        resources::list_tex_resources(&self.resolver)
            .into_iter()
            .map(|tex| {
                let mut raw = RawResource::new(tex.uri, tex.name);
                raw.description = Some(tex.description);
                raw.mime_type = Some(resources::TEX_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read a resource by URI, mapping failures onto MCP error codes.
    pub fn resource_contents(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let text = resources::read_tex_resource(&self.resolver, uri).map_err(|e| {
            tracing::warn!("Error reading resource {}: {}", uri, e);
            resource_error(e)
        })?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(resources::TEX_MIME_TYPE.to_string()),
                text,
                meta: None,
            }],
        })
    }
}

fn parse<T: DeserializeOwned>(args: JsonObject) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(args))?)
}

fn resource_error(e: LatexServerError) -> McpError {
    match e {
        LatexServerError::NotLatexFile(_) | LatexServerError::FileNotFound(_) => {
            McpError::resource_not_found(e.to_string(), None)
        }
        LatexServerError::IoError(_) => McpError::internal_error(e.to_string(), None),
        _ => McpError::invalid_params(e.to_string(), None),
    }
}

impl ServerHandler for LatexServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: Default::default(),
            server_info: Implementation {
                name: "latex-mcp-server".to_string(),
                title: Some("LaTeX MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "LaTeX file server. \
                 Relative paths resolve against the server's base directory; \
                 paths outside the base directory's parent are rejected. \
                 Use create_latex_file to start a document, edit_latex_file to change it, \
                 validate_latex and get_latex_structure to check it. \
                 Failed calls reply with text starting with 'Error: '."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<ListToolsResult, McpError>> + Send + '_
    {
        async move {
            Ok(ListToolsResult {
                tools: Self::tools(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<CallToolResult, McpError>> + Send + '_
    {
        let name = request.name.clone();
        let args = request.arguments.clone().unwrap_or_default();

        async move { Ok(self.call(&name, args)) }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<ListResourcesResult, McpError>>
           + Send
           + '_ {
        async move {
            Ok(ListResourcesResult {
                resources: self.resource_list(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<ReadResourceResult, McpError>>
           + Send
           + '_ {
        async move { self.resource_contents(&request.uri) }
    }
}
