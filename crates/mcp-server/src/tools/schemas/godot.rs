use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RunGodotCliRequest {
    #[schemars(description = "Path to the Godot project directory ('.' for the configured root)")]
    pub project_path: String,

    /// Split on whitespace; no shell quoting is applied.
    #[schemars(
        description = "Arguments to pass to the Godot executable (e.g., --headless --export-debug Windows)"
    )]
    pub args: String,

    #[schemars(
        description = "Path to the Godot executable (optional, defaults to the server's --godot setting)"
    )]
    pub godot_executable: Option<String>,
}
