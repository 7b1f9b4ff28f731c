//! MCP tool dispatch for the Godot project tools.

mod error;
mod router;
mod service;

use godot_project::ProjectRoot;
use rmcp::handler::server::tool::ToolRouter;

/// Godot MCP Service
///
/// Holds only immutable state: the project root every call is confined to
/// and the default Godot executable.
#[derive(Clone)]
pub struct GodotProjectService {
    root: ProjectRoot,
    /// Used by `run_godot_cli` when the call does not name an executable
    godot_executable: String,
    /// Tool router
    tool_router: ToolRouter<Self>,
}
