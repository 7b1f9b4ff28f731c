use crate::error::{ProjectError, Result};
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| ProjectError::io(path, e))
}

/// Write `content`, creating missing parent directories first
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProjectError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| ProjectError::io(path, e))?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Require an existing regular file
pub fn require_file(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| ProjectError::io(path, e))?;
    if !meta.is_file() {
        return Err(ProjectError::invalid_argument(format!(
            "{} is not a file",
            path.display()
        )));
    }
    Ok(())
}

/// Reject paths whose extension is not one of `allowed` (case-insensitive)
pub fn require_extension(path: &Path, allowed: &[&str]) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(|a| format!(".{a}"))
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ProjectError::invalid_argument(format!(
        "{} must have a {expected} extension",
        path.display()
    )))
}
