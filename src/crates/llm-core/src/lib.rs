//! Shared building blocks for LLM calls.
//!
//! # Modules
//!
//! - `context` - cancellation/deadline context threaded through calls
//! - `callbacks` - lifecycle hooks for observing calls
//! - `llm` - call options and function-calling tool types
//! - `error` - error types
//!
//! # Quick Start
//!
//! ```rust
//! use llm_core::llm::options::{with_model, with_temperature, CallOptions};
//!
//! let opts = CallOptions::from_options(&[with_model("llama3"), with_temperature(0.5)]);
//! assert_eq!(opts.temperature, Some(0.5));
//! ```

pub mod callbacks;
pub mod context;
pub mod error;
pub mod llm;

pub use callbacks::{CallbackHandler, LogHandler};
pub use context::CallContext;
pub use error::{LlmError, Result, ToolError};
