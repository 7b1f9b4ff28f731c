use godot_project::ProjectError;
use rmcp::model::{CallToolResult, Content};

/// `Error: <code>: <message>` with `is_error` set
pub(super) fn tool_error(tool: &str, err: &ProjectError) -> CallToolResult {
    log::warn!("{tool} failed: {err}");
    CallToolResult::error(vec![Content::text(format!(
        "Error: {}: {err}",
        err.code()
    ))])
}

pub(super) fn into_tool_result(
    tool: &str,
    outcome: godot_project::Result<String>,
) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => tool_error(tool, &err),
    }
}

/// A blocking tool task that panicked or was cancelled
pub(super) fn task_failed(tool: &str, err: tokio::task::JoinError) -> CallToolResult {
    log::error!("{tool} task failed: {err}");
    CallToolResult::error(vec![Content::text(format!(
        "Error: internal: {tool} task failed: {err}"
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::dispatch::GodotProjectService;
    use godot_project::ProjectRoot;

    fn text_of(result: &CallToolResult) -> &str {
        result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn errors_carry_code_prefix() {
        let result = into_tool_result(
            "read_gdscript",
            Err(ProjectError::PathEscape {
                path: "../x.gd".to_string(),
            }),
        );
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error: path_escape: "));
    }

    #[test]
    fn success_is_plain_text() {
        let result = into_tool_result("generate_docs", Ok("# Docs".to_string()));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "# Docs");
    }

    #[tokio::test]
    async fn panicking_task_is_an_error_result() {
        let temp = tempfile::TempDir::new().unwrap();
        let service = GodotProjectService::new(ProjectRoot::new(temp.path()).unwrap(), "godot");
        let result = service
            .blocking(
                "validate_project",
                |_: &ProjectRoot| -> godot_project::Result<String> { panic!("scanner blew up") },
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error: internal: validate_project task failed"));
    }
}
