use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadResourceRequest {
    #[schemars(description = "Path to the .tres or .res resource file to read")]
    pub file_path: String,
}

/// Shared by `create_resource` and `modify_resource`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WriteResourceRequest {
    #[schemars(description = "Path to the .tres or .res resource file")]
    pub file_path: String,

    #[schemars(description = "Complete resource file content")]
    pub content: String,
}
