use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateSceneTemplateRequest {
    #[schemars(description = "Path where the scene should be created")]
    pub scene_path: String,

    #[schemars(description = "Name for the scene's root node")]
    pub scene_name: String,

    /// Root node type (default: Node2D)
    #[schemars(description = "Type of root node (e.g., Node2D, Control, RigidBody2D). Default: Node2D")]
    pub root_node_type: Option<String>,
}
