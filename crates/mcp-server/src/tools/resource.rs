use godot_project::{
    read_bytes, require_extension, require_file, write_text, ProjectRoot, ResourceSummary, Result,
    RESOURCE_EXTENSIONS,
};

use super::schemas::resource::{ReadResourceRequest, WriteResourceRequest};

pub(super) fn read_resource(root: &ProjectRoot, request: &ReadResourceRequest) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    require_extension(&path, RESOURCE_EXTENSIONS)?;
    let bytes = read_bytes(&path)?;
    let summary = ResourceSummary::from_bytes(&bytes);

    let mut out = format!(
        "Resource File: {}\n\nSummary:\n{}",
        request.file_path,
        summary.render()
    );
    if let Ok(text) = std::str::from_utf8(&bytes) {
        out.push_str("\nContent:\n");
        out.push_str(text);
    }
    Ok(out)
}

pub(super) fn create_resource(
    root: &ProjectRoot,
    request: &WriteResourceRequest,
) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    require_extension(&path, RESOURCE_EXTENSIONS)?;
    write_text(&path, &request.content)?;
    Ok(format!(
        "Successfully created resource file: {}\n\nSummary:\n{}",
        request.file_path,
        ResourceSummary::from_text(&request.content).render()
    ))
}

pub(super) fn modify_resource(
    root: &ProjectRoot,
    request: &WriteResourceRequest,
) -> Result<String> {
    let path = root.resolve(&request.file_path)?;
    require_extension(&path, RESOURCE_EXTENSIONS)?;
    require_file(&path)?;
    write_text(&path, &request.content)?;
    Ok(format!(
        "Successfully modified resource file: {}\n\nSummary:\n{}",
        request.file_path,
        ResourceSummary::from_text(&request.content).render()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const THEME: &str = "[gd_resource type=\"Theme\" load_steps=2 format=3]\n\n[ext_resource type=\"FontFile\" path=\"res://font.ttf\" id=\"1\"]\n\n[resource]\ndefault_font = ExtResource(\"1\")\n";

    fn write_request(file_path: &str, content: &str) -> WriteResourceRequest {
        WriteResourceRequest {
            file_path: file_path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn create_read_and_modify() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();

        let created = create_resource(&root, &write_request("ui/theme.tres", THEME)).unwrap();
        assert!(created.contains("- Type: Theme"));

        let read = read_resource(
            &root,
            &ReadResourceRequest {
                file_path: "ui/theme.tres".to_string(),
            },
        )
        .unwrap();
        assert!(read.contains("- External resources: 1\n"));
        assert!(read.ends_with(THEME));

        let modified = modify_resource(
            &root,
            &write_request("ui/theme.tres", "[gd_resource type=\"StyleBoxFlat\" format=3]\n"),
        )
        .unwrap();
        assert!(modified.contains("- Type: StyleBoxFlat"));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        let err = create_resource(&root, &write_request("notes.txt", "x")).unwrap_err();
        assert_eq!(err.code(), "invalid_request");
        assert!(err.to_string().contains(".tres or .res"));
        assert!(!temp.path().join("notes.txt").exists());
    }

    #[test]
    fn modify_requires_existing_file() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        let err = modify_resource(&root, &write_request("missing.tres", THEME)).unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert!(!temp.path().join("missing.tres").exists());
    }

    #[test]
    fn binary_resources_are_summarized_without_content() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("mesh.res"), [0x52, 0x53, 0x52, 0x43, 0xff, 0xfe]).unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        let read = read_resource(
            &root,
            &ReadResourceRequest {
                file_path: "mesh.res".to_string(),
            },
        )
        .unwrap();
        assert!(read.contains("- Binary resource (6 bytes)"));
        assert!(!read.contains("Content:"));
    }
}
