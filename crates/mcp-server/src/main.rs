//! Godot MCP Server
//!
//! Lets AI agents inspect and edit a Godot project over the MCP protocol.
//!
//! ## Tools
//!
//! - `read_gdscript` / `modify_gdscript` / `create_gdscript` - script analysis and function edits
//! - `analyze_project_structure` / `read_godot_project` - project tree and descriptor overview
//! - `validate_project` - missing scripts, broken scene references, duplicate class names
//! - `generate_docs` - markdown overview of every script and scene
//! - `read_resource` / `create_resource` / `modify_resource` - `.tres` / `.res` files
//! - `create_scene_template` - one-node `.tscn` scaffold
//! - `check_godot_version` / `run_godot_cli` - engine version and CLI passthrough
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "godot": {
//!       "command": "godot-mcp",
//!       "args": ["--root", "/path/to/game"]
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use godot_project::ProjectRoot;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod config;
mod tools;

use config::ServerConfig;
use tools::GodotProjectService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServerConfig::parse();
    let root = ProjectRoot::new(&config.root)
        .with_context(|| format!("invalid project root {}", config.root.display()))?;

    log::info!(
        "Starting Godot MCP server (root: {}, godot: {})",
        root.path().display(),
        config.godot
    );

    let service = GodotProjectService::new(root, config.godot);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Godot MCP server stopped");
    Ok(())
}
