use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    cli::actions::SwapArgs,
    cli::args::CommonArgs,
    config::load_config,
    core::CheckContext,
    issues::ArgsPositionIssue,
    rules::args_order::check_args_position_issues,
};

use super::types::{
    ArgsPositionItem, ArgsPositionScanResult, ConfigDto, ConfigValues, FixArgsPositionParams,
    FixArgsPositionResult, GetConfigParams, Pagination, ScanArgsPositionParams,
};

#[derive(Clone)]
pub struct PinolintMcpServer {
    tool_router: ToolRouter<Self>,
}

fn scan_project(project_root_path: &str) -> Result<Vec<ArgsPositionIssue>, McpError> {
    let common = CommonArgs {
        source_root: Some(std::path::PathBuf::from(project_root_path)),
        verbose: false,
    };

    let ctx = CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

    let mut issues = check_args_position_issues(&ctx);
    issues.sort_by(|a, b| {
        a.context
            .file_path()
            .cmp(b.context.file_path())
            .then_with(|| a.context.line().cmp(&b.context.line()))
            .then_with(|| a.context.col().cmp(&b.context.col()))
    });
    Ok(issues)
}

fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl PinolintMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan for misordered pino logger arguments
    #[tool(
        description = "Scan for pino logger calls with the message string before the object argument. Returns paginated list of issues."
    )]
    async fn scan_args_position(
        &self,
        params: Parameters<ScanArgsPositionParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = &params.0.project_root_path;
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let issues = scan_project(path)?;

        let mut affected_files: HashSet<&str> = HashSet::new();
        for issue in &issues {
            affected_files.insert(issue.context.file_path());
        }

        let total_count = issues.len();
        let total_file_count = affected_files.len();

        let paginated: Vec<ArgsPositionItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(ArgsPositionItem::from_issue)
            .collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = ArgsPositionScanResult {
            total_count,
            total_file_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&scan_result)
    }

    /// Fix misordered pino logger arguments
    #[tool(
        description = "Swap misordered pino logger arguments back into object-first order. With apply=false (default) only previews the swaps; with apply=true rewrites the files."
    )]
    async fn fix_args_position(
        &self,
        params: Parameters<FixArgsPositionParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = &params.0.project_root_path;
        let apply = params.0.apply.unwrap_or(false);

        let issues = scan_project(path)?;
        let items: Vec<ArgsPositionItem> = issues.iter().map(ArgsPositionItem::from_issue).collect();
        let total_count = issues.len();

        let result = if apply {
            let stats = SwapArgs::run(&issues)
                .map_err(|e| McpError::internal_error(format!("Fix failed: {}", e), None))?;
            let remaining_count = scan_project(path)?.len();

            FixArgsPositionResult {
                applied: true,
                total_count,
                applied_count: stats.changes_applied,
                files_modified: stats.files_modified,
                remaining_count,
                items,
            }
        } else {
            FixArgsPositionResult {
                applied: false,
                total_count,
                applied_count: 0,
                files_modified: 0,
                remaining_count: 0,
                items,
            }
        };

        to_json_result(&result)
    }

    /// Get the current pinolint configuration
    #[tool(description = "Get the current pinolint configuration.")]
    async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_json_result(&config_dto)
    }
}

impl Default for PinolintMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for PinolintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Pinolint MCP helps AI agents fix pino logger argument order in JS/TS projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_args_position - List logger calls with the message before the object argument (paginated)\n\
                 3. fix_args_position - Swap misordered arguments (preview by default, apply=true to rewrite)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_args_position to find misordered calls\n\
                 2. Use fix_args_position with apply=false to review the planned swaps\n\
                 3. Use fix_args_position with apply=true to rewrite the files"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = PinolintMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
