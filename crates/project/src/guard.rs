use crate::error::{ProjectError, Result};
use std::path::{Component, Path, PathBuf};

/// The project root every tool call is confined to.
///
/// Containment is checked on the lexically normalized path only. Symlinks
/// inside the root that point elsewhere are followed by the OS as usual, so
/// this is a guard against `..` traversal, not a sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Fix the root, making it absolute against the current directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let absolute = if root.is_absolute() {
            root.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|e| ProjectError::io(root, e))?;
            cwd.join(root)
        };
        Ok(Self {
            root: normalize_lexically(&absolute),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied path and reject anything outside the root.
    ///
    /// Absolute inputs are accepted when they land inside the root. The
    /// path is used exactly as given, surrounding spaces included.
    pub fn resolve(&self, requested: &str) -> Result<PathBuf> {
        let resolved = normalize_lexically(&self.root.join(requested));
        if !resolved.starts_with(&self.root) {
            log::warn!("rejected path outside root: {requested}");
            return Err(ProjectError::PathEscape {
                path: requested.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Resolve and require an existing directory.
    pub fn resolve_dir(&self, requested: &str) -> Result<PathBuf> {
        let dir = self.resolve(requested)?;
        let meta = std::fs::metadata(&dir).map_err(|e| ProjectError::io(&dir, e))?;
        if !meta.is_dir() {
            return Err(ProjectError::invalid_argument(format!(
                "Path '{requested}' is not a directory"
            )));
        }
        Ok(dir)
    }
}

/// Forward-slash path of `path` relative to `base`.
pub fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let rel = rel.to_string_lossy().into_owned();
    Some(rel.replace('\\', "/"))
}

/// Collapse `.` and `..` without touching the filesystem.
///
/// `..` at the filesystem root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = out.parent().is_none();
                if !at_root {
                    out.pop();
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}
