use godot_project::{read_text, write_text, ProjectRoot, Result};
use godot_script::{analyze, mutate, MutationOutcome, Placement};

use super::schemas::script::{CreateGdscriptRequest, ModifyGdscriptRequest, ReadGdscriptRequest};
use super::util::preview;

const PREVIEW_CHARS: usize = 200;

pub(super) fn read_gdscript(root: &ProjectRoot, request: &ReadGdscriptRequest) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    let content = read_text(&path)?;
    let summary = analyze(&content);
    Ok(format!(
        "GDScript File: {}\n\nAnalysis:\n{}\nFull Content:\n{content}",
        request.file_path,
        summary.render()
    ))
}

pub(super) fn modify_gdscript(
    root: &ProjectRoot,
    request: &ModifyGdscriptRequest,
) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    let source = read_text(&path)?;
    let marker = request
        .insert_after
        .as_deref()
        .filter(|marker| !marker.is_empty());
    let name = request.function_name.trim();
    let mutation = mutate(&source, name, &request.function_content, marker)?;
    write_text(&path, &mutation.text)?;

    let mut out = format!(
        "Successfully modified {}\n{} function: {name}\n",
        request.file_path,
        mutation.outcome.verb(),
    );
    if marker.is_some() && mutation.outcome == MutationOutcome::Inserted(Placement::EndOfFile) {
        out.push_str("Marker not found; appended at end of file.\n");
    }
    if !analyze(&mutation.text).has_function(name) {
        out.push_str(&format!(
            "Warning: the written content does not declare func {name}.\n"
        ));
    }
    out.push_str("Function content:\n");
    out.push_str(&request.function_content);
    Ok(out)
}

/// Prefix `content` with the `class_name` and default `extends` headers.
///
/// `extends Node` is added only when the caller's own content has no
/// leading `extends` line.
pub(super) fn compose_script(content: &str, class_name: Option<&str>) -> String {
    let mut script = String::new();
    if !content.trim_start().starts_with("extends") {
        script.push_str("extends Node\n\n");
    }
    if let Some(class_name) = class_name.map(str::trim).filter(|name| !name.is_empty()) {
        script.push_str(&format!("class_name {class_name}\n\n"));
    }
    script.push_str(content);
    script
}

pub(super) fn create_gdscript(
    root: &ProjectRoot,
    request: &CreateGdscriptRequest,
) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    let script = compose_script(&request.content, request.class_name.as_deref());
    write_text(&path, &script)?;

    let mut out = format!("Successfully created GDScript file: {}\n", request.file_path);
    if let Some(class_name) = request.class_name.as_deref().filter(|n| !n.trim().is_empty()) {
        out.push_str(&format!("Class name: {}\n", class_name.trim()));
    }
    out.push_str("\nContent preview:\n");
    out.push_str(&preview(&script, PREVIEW_CHARS));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn root() -> (TempDir, ProjectRoot) {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn compose_adds_missing_headers() {
        assert_eq!(
            compose_script("func _ready():\n\tpass\n", Some("Player")),
            "extends Node\n\nclass_name Player\n\nfunc _ready():\n\tpass\n"
        );
        assert_eq!(
            compose_script("extends Sprite2D\n", Some("Ship")),
            "class_name Ship\n\nextends Sprite2D\n"
        );
        assert_eq!(compose_script("extends Node\n", None), "extends Node\n");
    }

    #[test]
    fn create_then_read_reports_summary() {
        let (temp, root) = root();
        let created = create_gdscript(
            &root,
            &CreateGdscriptRequest {
                file_path: "scripts/enemy.gd".to_string(),
                content: "signal hit\n\nvar speed: float = 2.0\n\nfunc attack():\n\tpass\n"
                    .to_string(),
                class_name: Some("Enemy".to_string()),
            },
        )
        .unwrap();
        assert!(created.contains("Class name: Enemy"));
        assert!(temp.path().join("scripts/enemy.gd").is_file());

        let read = read_gdscript(
            &root,
            &ReadGdscriptRequest {
                file_path: "scripts/enemy.gd".to_string(),
            },
        )
        .unwrap();
        assert!(read.starts_with("GDScript File: scripts/enemy.gd\n\nAnalysis:\n- Extends: Node\n"));
        assert!(read.contains("- Class Name: Enemy\n"));
        assert!(read.contains("- Typed Variables: speed: float\n"));
        assert!(read.contains("- Signals: hit\n"));
        assert!(read.contains("\nFull Content:\nextends Node\n"));
    }

    #[test]
    fn modify_replaces_existing_function() {
        let (temp, root) = root();
        std::fs::write(temp.path().join("a.gd"), "extends Node\nfunc foo():\n\tpass\n").unwrap();

        let out = modify_gdscript(
            &root,
            &ModifyGdscriptRequest {
                file_path: "a.gd".to_string(),
                function_name: "foo".to_string(),
                function_content: "func foo():\n\treturn 1\n".to_string(),
                insert_after: None,
            },
        )
        .unwrap();
        assert!(out.contains("Replaced function: foo"));
        assert!(!out.contains("Warning"));

        let text = std::fs::read_to_string(temp.path().join("a.gd")).unwrap();
        assert_eq!(text.matches("return 1").count(), 1);
        assert_eq!(text.matches("func foo(").count(), 1);
    }

    #[test]
    fn modify_reports_missing_marker() {
        let (temp, root) = root();
        std::fs::write(temp.path().join("a.gd"), "extends Node\n").unwrap();

        let out = modify_gdscript(
            &root,
            &ModifyGdscriptRequest {
                file_path: "a.gd".to_string(),
                function_name: "bar".to_string(),
                function_content: "func bar():\n\tpass".to_string(),
                insert_after: Some("# nowhere".to_string()),
            },
        )
        .unwrap();
        assert!(out.contains("Added function: bar"));
        assert!(out.contains("Marker not found"));
    }

    #[test]
    fn modify_missing_file_is_not_found() {
        let (_temp, root) = root();
        let err = modify_gdscript(
            &root,
            &ModifyGdscriptRequest {
                file_path: "missing.gd".to_string(),
                function_name: "foo".to_string(),
                function_content: "func foo():\n\tpass".to_string(),
                insert_after: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let (_temp, root) = root();
        let err = read_gdscript(
            &root,
            &ReadGdscriptRequest {
                file_path: "../outside.gd".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code(), "path_escape");
    }
}
