use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadGdscriptRequest {
    #[schemars(description = "Path to the GDScript file to read (relative to the project root)")]
    pub file_path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ModifyGdscriptRequest {
    #[schemars(description = "Path to the GDScript file to modify")]
    pub file_path: String,

    #[schemars(description = "Name of the function to add or replace")]
    pub function_name: String,

    /// Complete `func ...` block including its body
    #[schemars(description = "Complete function code to add or replace")]
    pub function_content: String,

    #[schemars(
        description = "Optional: insert a new function after the line containing this text. Ignored when the function already exists."
    )]
    pub insert_after: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateGdscriptRequest {
    #[schemars(description = "Path where the script should be created (relative to project)")]
    pub file_path: String,

    #[schemars(description = "GDScript content to write to the file")]
    pub content: String,

    #[schemars(description = "Optional class name for the script")]
    pub class_name: Option<String>,
}
