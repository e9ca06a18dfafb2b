//! LLM provider adapters.
//!
//! This crate holds provider-specific shapes built on top of `llm-core`.
//!
//! # Remote Providers
//!
//! - **OpenAI** - function-calling tool adapter ([`remote::openai::OpenAiTool`])
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::openai::{tool_call_func, OpenAiTool};
//! use llm::{CallContext, FunctionDefinition, Tool};
//!
//! let tool = OpenAiTool::new(
//!     FunctionDefinition::new("lookup", "looks things up"),
//!     tool_call_func(|_ctx, _input| async { Ok("42".to_string()) }),
//! );
//!
//! let answer = tool.call(&CallContext::new(), "query").await?;
//! assert_eq!(answer, "42");
//! ```

#[cfg(feature = "remote")]
pub mod remote;

// Re-export llm-core types for convenience
pub use llm_core::llm::{FunctionDefinition, Tool};
pub use llm_core::{CallContext, LlmError, ToolError};
