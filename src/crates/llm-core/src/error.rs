//! Error types for LLM calls and tool invocations.
//!
//! Two error enums live here:
//!
//! ```text
//! LlmError            - failures while driving a model call
//! ├── Cancelled       - the caller's context was cancelled
//! ├── Timeout         - the caller's deadline passed
//! ├── Streaming       - a streaming callback asked to stop
//! ├── InvalidRequest  - bad call options
//! ├── Serialization   - JSON encode/decode problems
//! └── Other
//!
//! ToolError           - failures raised by a tool's invocation function
//! ├── ExecutionFailed
//! ├── InvalidInput
//! ├── Cancelled
//! └── Other
//! ```
//!
//! Tool adapters never wrap or rewrite a [`ToolError`]: whatever the wrapped
//! function returns reaches the caller as-is, which is why the type is
//! `Clone + PartialEq`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for LLM operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while driving an LLM call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LlmError {
    /// The call context was cancelled.
    #[error("Call cancelled")]
    Cancelled,

    /// The call context deadline passed.
    #[error("Call timed out: {0}")]
    Timeout(String),

    /// A streaming callback returned an error and streaming stopped.
    #[error("Streaming stopped: {0}")]
    Streaming(String),

    /// Invalid call options.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to serialize/deserialize data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl LlmError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LlmError::Timeout(_))
    }

    /// Check if the caller gave up on the call.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, LlmError::Cancelled | LlmError::Timeout(_))
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Serialization(err.to_string())
    }
}

/// Errors returned by a tool's invocation function.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolError {
    /// Tool execution failed
    #[error("Tool '{tool}' execution failed: {error}")]
    ExecutionFailed { tool: String, error: String },

    /// Tool input could not be understood
    #[error("Invalid input for tool '{tool}': {error}")]
    InvalidInput { tool: String, error: String },

    /// The caller cancelled before the tool finished
    #[error("Tool '{tool}' cancelled")]
    Cancelled { tool: String },

    /// Anything else
    #[error("{0}")]
    Other(String),
}

impl From<LlmError> for ToolError {
    fn from(err: LlmError) -> Self {
        ToolError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_classification() {
        assert!(LlmError::Timeout("deadline".to_string()).is_retryable());
        assert!(!LlmError::Cancelled.is_retryable());
        assert!(LlmError::Cancelled.is_cancellation());
        assert!(!LlmError::Other("boom".to_string()).is_cancellation());
    }

    #[test]
    fn test_serde_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let llm_err: LlmError = err.into();
        assert!(matches!(llm_err, LlmError::Serialization(_)));
    }

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::ExecutionFailed {
            tool: "lookup".to_string(),
            error: "upstream 503".to_string(),
        };
        assert_eq!(err.to_string(), "Tool 'lookup' execution failed: upstream 503");
    }

    #[test]
    fn test_tool_error_json_roundtrip_keeps_value() {
        let err = ToolError::Cancelled {
            tool: "search".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: ToolError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
