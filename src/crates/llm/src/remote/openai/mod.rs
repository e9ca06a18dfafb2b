//! OpenAI adapters.
//!
//! - [`types`] - the `tools[]` wire shape of the chat completions API
//! - [`tool`] - [`OpenAiTool`], a tool definition paired with a local
//!   invocation function

pub mod tool;
pub mod types;

pub use tool::{tool_call_func, OpenAiTool, ToolCallFunc};
pub use types::{OpenAiFunctionDefinition, OpenAiToolSpec, ToolType};
