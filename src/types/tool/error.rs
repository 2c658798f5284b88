//! Tool error types.

use thiserror::Error;

pub type ToolResult<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("tool not found: {name}")]
    NotFound { name: String },

    #[error("tool '{tool}' failed: {message}")]
    ExecutionFailed { tool: String, message: String },

    #[error("tool '{name}' is already registered")]
    Duplicate { name: String },

    /// Failure from a tool implementation that has no dedicated kind.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of [`ToolError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    InvalidInput,
    ToolNotFound,
    DownstreamExecution,
    Registration,
}

impl ToolError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn execution_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(error.into())
    }

    pub fn kind(&self) -> ToolErrorKind {
        match self {
            Self::InvalidInput { .. } => ToolErrorKind::InvalidInput,
            Self::NotFound { .. } => ToolErrorKind::ToolNotFound,
            Self::ExecutionFailed { .. } | Self::Other(_) => ToolErrorKind::DownstreamExecution,
            Self::Duplicate { .. } => ToolErrorKind::Registration,
        }
    }

    /// Normalizes a failure returned by the tool `name`.
    ///
    /// Recognized kinds pass through untouched; foreign errors become
    /// [`ToolError::ExecutionFailed`] carrying the original text.
    pub fn from_downstream(name: &str, error: ToolError) -> Self {
        match error {
            Self::Other(source) => {
                Self::execution_failed(name, format!("error executing tool: {}", source))
            }
            recognized => recognized,
        }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.to_string().contains(pattern)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_input(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_name() {
        let err = ToolError::not_found("nonexistent_tool");
        assert!(err.contains("nonexistent_tool"));
        assert_eq!(err.kind(), ToolErrorKind::ToolNotFound);
    }

    #[test]
    fn test_downstream_wraps_foreign_errors() {
        let io = std::io::Error::other("connection reset");
        let err = ToolError::from_downstream("crm_list_contacts", ToolError::other(io));

        assert_eq!(err.kind(), ToolErrorKind::DownstreamExecution);
        assert!(err.contains("connection reset"));
        assert!(err.contains("crm_list_contacts"));
    }

    #[test]
    fn test_downstream_passes_recognized_errors() {
        let err = ToolError::from_downstream("crm_get", ToolError::invalid_input("missing id"));
        assert!(matches!(err, ToolError::InvalidInput { ref message } if message == "missing id"));
    }

    #[test]
    fn test_json_error_is_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ToolError = json_err.into();
        assert_eq!(err.kind(), ToolErrorKind::InvalidInput);
    }
}
