//! Callback handlers for observing LLM calls.
//!
//! A [`CallbackHandler`] receives lifecycle hooks while a call runs. Every
//! hook has a no-op default, so handlers only override what they care about.
//!
//! ```rust,ignore
//! use llm_core::callbacks::CallbackHandler;
//! use llm_core::CallContext;
//! use async_trait::async_trait;
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl CallbackHandler for Printer {
//!     async fn handle_streaming_func(&self, _ctx: &CallContext, chunk: &[u8]) {
//!         print!("{}", String::from_utf8_lossy(chunk));
//!     }
//! }
//! ```

use crate::context::CallContext;
use crate::error::LlmError;
use async_trait::async_trait;
use tracing::{info, warn};

/// Lifecycle hooks for an LLM call.
///
/// Handlers are shared as `Arc<dyn CallbackHandler>` and may be invoked from
/// any task, hence `Send + Sync`.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    /// Called once per streamed chunk of model output.
    async fn handle_streaming_func(&self, _ctx: &CallContext, _chunk: &[u8]) {}

    /// Called with complete text produced by a call.
    async fn handle_text(&self, _ctx: &CallContext, _text: &str) {}

    /// Called when a call fails.
    async fn handle_llm_error(&self, _ctx: &CallContext, _err: &LlmError) {}
}

/// Handler that logs every hook through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

#[async_trait]
impl CallbackHandler for LogHandler {
    async fn handle_streaming_func(&self, _ctx: &CallContext, chunk: &[u8]) {
        info!(
            chunk = %String::from_utf8_lossy(chunk),
            len = chunk.len(),
            "Streaming chunk"
        );
    }

    async fn handle_text(&self, _ctx: &CallContext, text: &str) {
        info!(text = %text, "Text");
    }

    async fn handle_llm_error(&self, _ctx: &CallContext, err: &LlmError) {
        warn!(error = %err, "LLM call failed");
    }
}
