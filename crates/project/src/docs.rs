use crate::descriptor::{ProjectDescriptor, PROJECT_FILE};
use crate::files::read_text;
use crate::scanner::{ProjectInventory, ScanWarning};
use crate::scene::SceneFile;
use godot_script::analyze;
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct DocReport {
    pub markdown: String,
    pub warnings: Vec<ScanWarning>,
}

fn scene_line(rel: &str, scene: &SceneFile) -> String {
    match scene.root_node() {
        Some(root) => format!(
            "- `{rel}`: root `{}` ({}), {} node(s)",
            root.name,
            root.node_type.as_deref().unwrap_or("instanced"),
            scene.nodes.len()
        ),
        None => format!("- `{rel}`: no root node"),
    }
}

/// Markdown overview of every script and scene under `root`.
///
/// Output depends only on file contents: inventories are sorted by path.
pub fn generate(root: &Path) -> DocReport {
    let inventory = ProjectInventory::collect(root);
    let mut warnings = inventory.warnings.clone();
    let mut skip = |rel: &str, err: crate::ProjectError| {
        log::warn!("docs: skipping {rel}: {err}");
        warnings.push(ScanWarning {
            path: rel.to_string(),
            message: err.to_string(),
        });
    };

    let mut md = String::new();
    match read_text(&root.join(PROJECT_FILE)) {
        Ok(content) => {
            let descriptor = ProjectDescriptor::parse(&content);
            let _ = writeln!(md, "# {} Documentation\n", descriptor.name);
            let _ = writeln!(md, "- Version: {}", descriptor.version);
            if let Some(engine) = descriptor.engine_version() {
                let _ = writeln!(md, "- Godot: {engine}");
            }
            md.push('\n');
        }
        Err(_) => {
            let _ = writeln!(md, "# Project Documentation\n");
        }
    }

    let _ = writeln!(md, "## Scripts ({})\n", inventory.scripts.len());
    for rel in &inventory.scripts {
        match read_text(&root.join(rel)) {
            Ok(source) => {
                let _ = writeln!(md, "### {rel}\n");
                md.push_str(&analyze(&source).render());
                md.push('\n');
            }
            Err(err) => skip(rel, err),
        }
    }

    let _ = writeln!(md, "## Scenes ({})\n", inventory.scenes.len());
    for rel in &inventory.scenes {
        match read_text(&root.join(rel)) {
            Ok(text) => {
                let _ = writeln!(md, "{}", scene_line(rel, &SceneFile::parse(&text)));
            }
            Err(err) => skip(rel, err),
        }
    }

    DocReport {
        markdown: md,
        warnings,
    }
}
