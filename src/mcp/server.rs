use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::report::display_path,
    config::load_config,
    core::{
        ExtractError,
        document::{AutoKey, FileDocument, FixedKey, KeyPrompt},
        processor::run_extraction,
        usage::{find_usages, resolve_usages},
    },
    workspace::Workspace,
};

use super::types::{
    ConfigDto, ExtractTextParams, ExtractTextResult, FileKeyItem, FileKeysResult,
    FindKeyForTextParams, GetConfigParams, KeyLookupResult, ListFileKeysParams, LookupKeyParams,
    PlaceholderItem,
};

#[derive(Clone)]
pub struct LexiMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LexiMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current lexi configuration
    #[tool(description = "Get the current lexi configuration and the locale search order.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file(),
            variants: result.config.variants(),
            config: result.config,
        };

        json_result(&config_dto)
    }

    /// Replace a hard-coded string with an I18n.t call
    #[tool(
        description = "Extract a hard-coded string from a Ruby (.rb) or ERB (.erb) file into the base locale YAML file and replace it with an I18n.t call. Select the string with `text` (and `occurrence`) or with `start`/`end` character offsets. Reuses an existing key when one already holds the same value. Dry run unless `apply` is true."
    )]
    pub async fn extract_text(
        &self,
        params: Parameters<ExtractTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = open_workspace(&params.project_root_path)?;
        let path = workspace
            .resolve_file(Path::new(&params.file_path))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let mut document = FileDocument::open(&path).map_err(extract_error)?;
        let selected = match (&params.text, params.start, params.end) {
            (Some(text), _, _) => {
                document.select_text(text, params.occurrence.unwrap_or(1) as usize)
            }
            (None, Some(start), Some(end)) => {
                document.select_chars(start as usize..end as usize)
            }
            _ => Err(ExtractError::NoActiveSelection),
        };
        selected.map_err(extract_error)?;

        let apply = params.apply.unwrap_or(false);
        let mut prompt: Box<dyn KeyPrompt> = match params.key {
            Some(key) => Box::new(FixedKey(key)),
            None => Box::new(AutoKey),
        };

        workspace.store.refresh().await.map_err(extract_error)?;
        let outcome = run_extraction(workspace.context(), &mut document, prompt.as_mut(), apply)
            .await
            .map_err(extract_error)?;
        if apply {
            document.save().map_err(extract_error)?;
        }

        let result = ExtractTextResult {
            placeholders: outcome
                .placeholders
                .iter()
                .map(|(slug, expression)| PlaceholderItem {
                    slug: slug.to_string(),
                    expression: expression.to_string(),
                })
                .collect(),
            key: outcome.key,
            reused: outcome.reused,
            value: outcome.value,
            locale_file: display_path(&workspace.root, &outcome.locale_file),
            replacement: outcome.replacement,
            applied: apply,
            action: outcome.action.map(|action| action.as_str().to_string()),
        };

        json_result(&result)
    }

    /// Show the value and location of a key
    #[tool(
        description = "Look up a key, with or without its locale segment (e.g. `models.user.greeting`), across the configured locale variants. Returns its value, locale file and line."
    )]
    pub async fn lookup_key(
        &self,
        params: Parameters<LookupKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;
        workspace.store.refresh().await.map_err(extract_error)?;

        let result = match workspace.store.find_by_suffix(params.0.key.trim()) {
            Some(entry) => KeyLookupResult {
                found: true,
                line: workspace.definition_line(&entry.source_file, &entry.key),
                locale_file: Some(display_path(&workspace.root, &entry.source_file)),
                key: Some(entry.key),
                value: Some(entry.value),
            },
            None => KeyLookupResult::not_found(),
        };

        json_result(&result)
    }

    /// Find the key holding a string
    #[tool(
        description = "Find the existing key whose value is exactly `text` (use %{name} for placeholders). Configured base files are searched first."
    )]
    pub async fn find_key_for_text(
        &self,
        params: Parameters<FindKeyForTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;
        workspace.store.refresh().await.map_err(extract_error)?;

        let result = match workspace.key_for_text(&params.0.text) {
            Some(found) => KeyLookupResult {
                found: true,
                line: workspace.definition_line(&found.source_file, &found.key),
                locale_file: Some(display_path(&workspace.root, &found.source_file)),
                key: Some(found.key),
                value: Some(params.0.text.clone()),
            },
            None => KeyLookupResult::not_found(),
        };

        json_result(&result)
    }

    /// List the I18n.t keys used by a file
    #[tool(
        description = "List every literal-key I18n.t call in a source file with its position and, when defined, its value and locale file."
    )]
    pub async fn list_file_keys(
        &self,
        params: Parameters<ListFileKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;
        let path = workspace
            .resolve_file(Path::new(&params.0.file_path))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let source = std::fs::read_to_string(&path).map_err(|e| {
            McpError::internal_error(format!("Failed to read {}: {}", path.display(), e), None)
        })?;

        workspace.store.refresh().await.map_err(extract_error)?;
        let resolved = resolve_usages(&find_usages(&source), &workspace.store);

        let keys: Vec<FileKeyItem> = resolved
            .into_iter()
            .map(|usage| FileKeyItem {
                found: usage.is_found(),
                key: usage.key,
                line: usage.line,
                col: usage.col,
                value: usage.value,
                locale_file: usage
                    .locale_file
                    .map(|file| display_path(&workspace.root, &file)),
                locale_line: usage.locale_line,
            })
            .collect();

        let result = FileKeysResult {
            file_path: display_path(&workspace.root, &path),
            total_count: keys.len(),
            missing_count: keys.iter().filter(|key| !key.found).count(),
            keys,
        };

        json_result(&result)
    }
}

impl Default for LexiMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for LexiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Lexi MCP moves hard-coded strings of Rails projects into I18n YAML files.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration and locale search order\n\
                 2. find_key_for_text - Check whether a string already has a key\n\
                 3. extract_text - Replace a string in a .rb or .erb file with an I18n.t call\n\
                 4. lookup_key - Show the value and location of a key\n\
                 5. list_file_keys - List the I18n.t keys used by a file\n\n\
                 Recommended Workflow:\n\
                 1. Run extract_text without `apply` to preview the key and call\n\
                 2. Run it again with `apply: true` to write the locale file and the source file\n\
                 3. Use list_file_keys to confirm every key of the file resolves"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn open_workspace(project_root_path: &str) -> Result<Workspace, McpError> {
    Workspace::load(Path::new(project_root_path), None).map_err(|e| {
        McpError::internal_error(format!("Failed to load workspace: {}", e), None)
    })
}

/// Notices become invalid-params errors, anything else an internal error.
fn extract_error(err: ExtractError) -> McpError {
    debug!("Extraction stopped: {}", err);
    if err.is_notice() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LexiMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
