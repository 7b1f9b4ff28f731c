use super::GodotProjectService;
use crate::tools::schemas::godot::RunGodotCliRequest;
use crate::tools::schemas::project::{
    AnalyzeProjectStructureRequest, CheckGodotVersionRequest, ProjectRequest,
};
use crate::tools::schemas::resource::{ReadResourceRequest, WriteResourceRequest};
use crate::tools::schemas::scene::CreateSceneTemplateRequest;
use crate::tools::schemas::script::{
    CreateGdscriptRequest, ModifyGdscriptRequest, ReadGdscriptRequest,
};
use crate::tools::{godot, project, resource, scene, script};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};

pub(super) fn build_tool_router() -> ToolRouter<GodotProjectService> {
    GodotProjectService::tool_router()
}

#[tool_router]
impl GodotProjectService {
    /// Script summary plus full source.
    #[tool(
        description = "Read a GDScript file and summarize it: extends, class_name, functions, variables (typed and untyped), annotations and signals, followed by the full content."
    )]
    pub async fn read_gdscript(
        &self,
        Parameters(request): Parameters<ReadGdscriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("read_gdscript", move |root| {
            script::read_gdscript(root, &request)
        })
        .await
    }

    /// Replace or insert one function; the rest of the file is kept byte-for-byte.
    #[tool(
        description = "Modify an existing GDScript file by adding or replacing one top-level function. An existing `func <name>(` is replaced up to the next top-level func; otherwise the function is inserted after the line containing `insert_after`, or appended."
    )]
    pub async fn modify_gdscript(
        &self,
        Parameters(request): Parameters<ModifyGdscriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("modify_gdscript", move |root| {
            script::modify_gdscript(root, &request)
        })
        .await
    }

    #[tool(
        description = "Create a new GDScript file with the given content. Adds `extends Node` when the content has no extends line and `class_name` when given; creates parent directories."
    )]
    pub async fn create_gdscript(
        &self,
        Parameters(request): Parameters<CreateGdscriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("create_gdscript", move |root| {
            script::create_gdscript(root, &request)
        })
        .await
    }

    /// Bounded tree + unbounded file lists.
    #[tool(
        description = "Get an overview of the entire Godot project: a directory tree limited to max_depth (default 4) plus complete lists of scripts, scenes and resources at any depth."
    )]
    pub async fn analyze_project_structure(
        &self,
        Parameters(request): Parameters<AnalyzeProjectStructureRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("analyze_project_structure", move |root| {
            project::analyze_project_structure(root, &request)
        })
        .await
    }

    #[tool(
        description = "Read and analyze project.godot: project name and version, declared Godot version, a shallow directory tree and the start of the configuration."
    )]
    pub async fn read_godot_project(
        &self,
        Parameters(request): Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("read_godot_project", move |root| {
            project::read_godot_project(root, &request)
        })
        .await
    }

    /// Read-only cross-check of scripts and scenes.
    #[tool(
        description = "Check for missing scripts, broken scene references, and duplicate class names in the Godot project. Never modifies files."
    )]
    pub async fn validate_project(
        &self,
        Parameters(request): Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("validate_project", move |root| {
            project::validate_project(root, &request)
        })
        .await
    }

    #[tool(
        description = "Generate markdown documentation for all scripts and scenes in the Godot project."
    )]
    pub async fn generate_docs(
        &self,
        Parameters(request): Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("generate_docs", move |root| {
            project::generate_docs(root, &request)
        })
        .await
    }

    #[tool(
        description = "Parse the Godot version from config/features in project.godot and warn if it doesn't match the expected version."
    )]
    pub async fn check_godot_version(
        &self,
        Parameters(request): Parameters<CheckGodotVersionRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("check_godot_version", move |root| {
            project::check_godot_version(root, &request)
        })
        .await
    }

    #[tool(description = "Create a basic scene file template (.tscn) with a single root node.")]
    pub async fn create_scene_template(
        &self,
        Parameters(request): Parameters<CreateSceneTemplateRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("create_scene_template", move |root| {
            scene::create_scene_template(root, &request)
        })
        .await
    }

    #[tool(
        description = "Read the content and summary (type, external and sub-resource counts) of a Godot .tres or .res resource file."
    )]
    pub async fn read_resource(
        &self,
        Parameters(request): Parameters<ReadResourceRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("read_resource", move |root| {
            resource::read_resource(root, &request)
        })
        .await
    }

    #[tool(
        description = "Create a new Godot .tres or .res resource file with specified content."
    )]
    pub async fn create_resource(
        &self,
        Parameters(request): Parameters<WriteResourceRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("create_resource", move |root| {
            resource::create_resource(root, &request)
        })
        .await
    }

    #[tool(
        description = "Modify an existing Godot .tres or .res resource file by replacing its content."
    )]
    pub async fn modify_resource(
        &self,
        Parameters(request): Parameters<WriteResourceRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.blocking("modify_resource", move |root| {
            resource::modify_resource(root, &request)
        })
        .await
    }

    /// Shell-free passthrough to the Godot executable.
    #[tool(
        description = "Run a Godot CLI command (e.g., --headless --export-debug Windows) with --path set to the project and return exit status, stdout and stderr."
    )]
    pub async fn run_godot_cli(
        &self,
        Parameters(request): Parameters<RunGodotCliRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::info!("tool call: run_godot_cli");
        let outcome = godot::run_godot_cli(self.root(), self.godot_executable(), &request).await;
        Ok(super::error::into_tool_result("run_godot_cli", outcome))
    }
}
