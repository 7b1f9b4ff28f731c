use super::error::{into_tool_result, task_failed};
use super::{router, GodotProjectService};
use crate::tools::catalog;
use godot_project::ProjectRoot;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ErrorData as McpError, ServerHandler};

impl GodotProjectService {
    pub fn new(root: ProjectRoot, godot_executable: impl Into<String>) -> Self {
        Self {
            root,
            godot_executable: godot_executable.into(),
            tool_router: router::build_tool_router(),
        }
    }

    pub(super) fn root(&self) -> &ProjectRoot {
        &self.root
    }

    pub(super) fn godot_executable(&self) -> &str {
        &self.godot_executable
    }

    /// Run a filesystem-bound tool on the blocking pool.
    pub(super) async fn blocking<F>(
        &self,
        tool: &'static str,
        job: F,
    ) -> Result<CallToolResult, McpError>
    where
        F: FnOnce(&ProjectRoot) -> godot_project::Result<String> + Send + 'static,
    {
        log::info!("tool call: {tool}");
        let root = self.root.clone();
        let result = match tokio::task::spawn_blocking(move || job(&root)).await {
            Ok(outcome) => into_tool_result(tool, outcome),
            Err(err) => task_failed(tool, err),
        };
        Ok(result)
    }
}

#[tool_handler]
impl ServerHandler for GodotProjectService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
