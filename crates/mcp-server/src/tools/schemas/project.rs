use rmcp::schemars;
use serde::Deserialize;

/// Tools that only need the project directory
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProjectRequest {
    #[schemars(description = "Path to the Godot project directory ('.' for the configured root)")]
    pub project_path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeProjectStructureRequest {
    #[schemars(description = "Path to the Godot project directory ('.' for the configured root)")]
    pub project_path: String,

    /// Display-tree depth (default: 4). File lists are never depth-limited.
    #[schemars(description = "Maximum directory depth to show in the tree (default 4)")]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckGodotVersionRequest {
    #[schemars(description = "Path to the Godot project directory ('.' for the configured root)")]
    pub project_path: String,

    #[schemars(description = "Expected Godot version (e.g., 4.4)")]
    pub expected_version: String,
}
