//! Godot MCP tool surface.
//!
//! Schemas, dispatch and the per-tool implementations live in separate
//! submodules. Implementations are plain functions over a [`ProjectRoot`]
//! returning rendered text; dispatch turns them into MCP results.
//!
//! [`ProjectRoot`]: godot_project::ProjectRoot

pub(crate) mod catalog;
mod dispatch;
mod godot;
mod project;
mod resource;
mod scene;
mod schemas;
mod script;
mod util;

pub use dispatch::GodotProjectService;
