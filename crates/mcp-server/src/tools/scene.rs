use godot_project::{scene_template, write_text, ProjectError, ProjectRoot, Result};

use super::schemas::scene::CreateSceneTemplateRequest;

const DEFAULT_ROOT_NODE_TYPE: &str = "Node2D";

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() || value.contains(['"', '\n']) {
        return Err(ProjectError::invalid_argument(format!(
            "{what} must be a non-empty single-line name without quotes"
        )));
    }
    Ok(value)
}

pub(super) fn create_scene_template(
    root: &ProjectRoot,
    request: &CreateSceneTemplateRequest,
) -> Result<String> {
    let path = root.resolve(&request.scene_path)?;
    let scene_name = non_empty(&request.scene_name, "scene_name")?;
    let root_type = non_empty(
        request
            .root_node_type
            .as_deref()
            .unwrap_or(DEFAULT_ROOT_NODE_TYPE),
        "root_node_type",
    )?;

    write_text(&path, &scene_template(scene_name, root_type))?;
    Ok(format!(
        "Successfully created scene template: {}\nRoot node: {root_type}\nScene name: {scene_name}\n\nYou can now open this scene in Godot and add more nodes!",
        request.scene_path
    ))
}
