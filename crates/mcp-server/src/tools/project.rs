use godot_project::{
    display_tree, generate_docs as generate_doc_report, read_text, validate, ProjectDescriptor,
    ProjectInventory, ProjectRoot, Result, ScanWarning, DEFAULT_MAX_DEPTH, PROJECT_FILE, UNKNOWN,
};
use std::fmt::Write;

use super::schemas::project::{
    AnalyzeProjectStructureRequest, CheckGodotVersionRequest, ProjectRequest,
};
use super::util::{bullet_list, preview};

/// Tree depth used by `read_godot_project`
const OVERVIEW_DEPTH: usize = 3;
const CONFIG_PREVIEW_CHARS: usize = 500;

const RECOMMENDATIONS: &str = "DEVELOPMENT RECOMMENDATIONS:\n\
- Keep scripts organized in dedicated folders\n\
- Use clear naming conventions (PascalCase for classes)\n\
- Consider creating an autoload for global game state\n\
- Use scenes for reusable components\n";

fn render_warnings(out: &mut String, warnings: &[ScanWarning]) {
    if warnings.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nWARNINGS ({}):", warnings.len());
    for warning in warnings {
        let _ = writeln!(out, "- {}: {}", warning.path, warning.message);
    }
}

fn read_descriptor(dir: &std::path::Path) -> Result<(ProjectDescriptor, String)> {
    let content = read_text(&dir.join(PROJECT_FILE))?;
    Ok((ProjectDescriptor::parse(&content), content))
}

pub(super) fn analyze_project_structure(
    root: &ProjectRoot,
    request: &AnalyzeProjectStructureRequest,
) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let max_depth = request.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    let tree = display_tree(&dir, max_depth);
    let inventory = ProjectInventory::collect(&dir);

    let mut out = String::from("Complete Godot Project Analysis:\n\n");
    let _ = writeln!(out, "DIRECTORY STRUCTURE (depth {max_depth}):");
    out.push_str(&tree.render());
    let _ = writeln!(out, "\nGDSCRIPT FILES ({}):", inventory.scripts.len());
    out.push_str(&bullet_list(&inventory.scripts));
    let _ = writeln!(out, "\nSCENE FILES ({}):", inventory.scenes.len());
    out.push_str(&bullet_list(&inventory.scenes));
    let _ = writeln!(out, "\nRESOURCE FILES ({}):", inventory.resources.len());
    out.push_str(&bullet_list(&inventory.resources));

    // The tree already flags what it could see; list the rest.
    let unseen: Vec<ScanWarning> = inventory
        .warnings
        .into_iter()
        .filter(|w| !tree.warnings.iter().any(|t| t.path == w.path))
        .collect();
    render_warnings(&mut out, &unseen);

    out.push('\n');
    out.push_str(RECOMMENDATIONS);
    Ok(out)
}

pub(super) fn read_godot_project(root: &ProjectRoot, request: &ProjectRequest) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let (descriptor, content) = read_descriptor(&dir)?;
    let tree = display_tree(&dir, OVERVIEW_DEPTH);

    let mut out = String::from("Godot Project Analysis:\n\n");
    let _ = writeln!(out, "Project Name: {}", descriptor.name);
    let _ = writeln!(out, "Project Version: {}", descriptor.version);
    let _ = writeln!(
        out,
        "Godot Version: {}",
        descriptor.engine_version().unwrap_or(UNKNOWN)
    );
    if !descriptor.features.is_empty() {
        let _ = writeln!(out, "Features: {}", descriptor.features.join(", "));
    }
    let _ = writeln!(out, "\nProject Structure:");
    out.push_str(&tree.render());
    let _ = writeln!(out, "\nProject Configuration:");
    out.push_str(&preview(&content, CONFIG_PREVIEW_CHARS));
    Ok(out)
}

pub(super) fn validate_project(root: &ProjectRoot, request: &ProjectRequest) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let report = validate(&dir);
    Ok(format!(
        "Project validation for {}:\n\n{}",
        request.project_path,
        report.render()
    ))
}

pub(super) fn generate_docs(root: &ProjectRoot, request: &ProjectRequest) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let report = generate_doc_report(&dir);
    let mut out = report.markdown;
    render_warnings(&mut out, &report.warnings);
    Ok(out)
}

pub(super) fn check_godot_version(
    root: &ProjectRoot,
    request: &CheckGodotVersionRequest,
) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let (descriptor, _) = read_descriptor(&dir)?;
    let expected = request.expected_version.trim();

    let verdict = match (descriptor.engine_version(), descriptor.engine_matches(expected)) {
        (Some(actual), Some(true)) => {
            format!("Godot version {actual} matches the expected version {expected}.")
        }
        (Some(actual), _) => format!(
            "Warning: project declares Godot {actual}, but {expected} was expected."
        ),
        (None, _) => format!(
            "Warning: no Godot version found in config/features of {PROJECT_FILE} (expected {expected})."
        ),
    };
    Ok(format!("Project: {}\n{verdict}", descriptor.name))
}
