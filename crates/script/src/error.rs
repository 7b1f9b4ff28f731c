use thiserror::Error;

/// Result type for script operations
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors that can occur while editing script source
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The requested function name is not a GDScript identifier
    #[error("Invalid function name: {0:?}")]
    InvalidFunctionName(String),

    /// The replacement body is empty
    #[error("Function content is empty")]
    EmptyFunctionBody,

    /// A search pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScriptError {
    /// Create an invalid function name error
    pub fn invalid_function_name(name: impl Into<String>) -> Self {
        Self::InvalidFunctionName(name.into())
    }
}
