use std::path::Path;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProjectError>;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Invalid file path: {path} resolves outside the project root")]
    PathEscape { path: String },

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Script(#[from] godot_script::ScriptError),
}

impl ProjectError {
    /// Classify an IO failure on `path`, splitting absence from other faults.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Stable machine-readable code for tool error payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::PathEscape { .. } => "path_escape",
            Self::NotFound { .. } => "not_found",
            Self::Io { .. } => "io",
            Self::InvalidArgument(_) | Self::Script(_) => "invalid_request",
        }
    }
}
