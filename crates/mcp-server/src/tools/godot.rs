use godot_project::{ProjectError, ProjectRoot, Result};
use std::fmt::Write;
use std::path::Path;
use tokio::process::Command;

use super::schemas::godot::RunGodotCliRequest;

/// Run the Godot executable with `--path <project>` followed by `args`.
///
/// A non-zero exit is reported in the text, not as a tool error; only a
/// failure to launch the executable is an error.
pub(super) async fn run_godot_cli(
    root: &ProjectRoot,
    default_executable: &str,
    request: &RunGodotCliRequest,
) -> Result<String> {
    let dir = root.resolve_dir(&request.project_path)?;
    let executable = request
        .godot_executable
        .as_deref()
        .map(str::trim)
        .filter(|exe| !exe.is_empty())
        .unwrap_or(default_executable);
    let args: Vec<&str> = request.args.split_whitespace().collect();

    log::info!("running {executable} --path {} {}", dir.display(), args.join(" "));
    let output = Command::new(executable)
        .arg("--path")
        .arg(&dir)
        .args(&args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| ProjectError::io(Path::new(executable), e))?;

    let status = match output.status.code() {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Command: {executable} --path {} {}",
        request.project_path,
        args.join(" ")
    );
    let _ = writeln!(out, "Exit status: {status}");
    let _ = writeln!(out, "\nSTDOUT:\n{}", String::from_utf8_lossy(&output.stdout));
    let _ = writeln!(out, "STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(args: &str, exe: Option<&str>) -> RunGodotCliRequest {
        RunGodotCliRequest {
            project_path: ".".to_string(),
            args: args.to_string(),
            godot_executable: exe.map(str::to_string),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn passes_project_path_and_split_args() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        let out = run_godot_cli(&root, "godot", &request("--headless   --version", Some("echo")))
            .await
            .unwrap();
        assert!(out.contains("Exit status: 0\n"));
        let expected = format!("--path {} --headless --version", root.path().display());
        assert!(out.contains(&expected), "{out}");
    }

    #[tokio::test]
    async fn missing_executable_is_an_error() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path()).unwrap();
        let err = run_godot_cli(&root, "definitely-not-a-godot-binary", &request("--version", None))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "not_found");
    }
}
