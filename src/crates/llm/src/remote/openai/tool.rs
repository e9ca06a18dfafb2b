//! OpenAI function-calling tool adapter.
//!
//! [`OpenAiTool`] pairs the wire description the model sees
//! ([`OpenAiToolSpec`]) with the local function that runs when the model
//! calls it.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::openai::{tool_call_func, OpenAiTool};
//! use llm::{CallContext, FunctionDefinition};
//!
//! let tool = OpenAiTool::new(
//!     FunctionDefinition::new("lookup", "looks things up"),
//!     tool_call_func(|ctx, input| async move {
//!         if ctx.is_cancelled() {
//!             return Err(ToolError::Cancelled { tool: "lookup".to_string() });
//!         }
//!         Ok(format!("result for {}", input))
//!     }),
//! );
//!
//! let output = tool.call(&CallContext::new(), "query").await?;
//! ```

use super::types::OpenAiToolSpec;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use llm_core::llm::{FunctionDefinition, Tool};
use llm_core::{CallContext, ToolError};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Local implementation of a tool: `(context, input) -> output`.
pub type ToolCallFunc =
    Arc<dyn Fn(CallContext, String) -> BoxFuture<'static, Result<String, ToolError>> + Send + Sync>;

/// Wrap an async closure as a [`ToolCallFunc`].
pub fn tool_call_func<F, Fut>(f: F) -> ToolCallFunc
where
    F: Fn(CallContext, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, ToolError>> + Send + 'static,
{
    Arc::new(move |ctx: CallContext, input: String| f(ctx, input).boxed())
}

/// OpenAI tool definition plus the function that implements it.
///
/// Cloning shares the function. The adapter holds no mutable state, so it
/// can be called from many tasks at once; whether that is safe for the
/// wrapped function is up to whoever wrote it.
#[derive(Clone)]
pub struct OpenAiTool {
    spec: OpenAiToolSpec,
    call_func: ToolCallFunc,
}

impl OpenAiTool {
    /// Create a new tool. The definition is copied into a `"function"` tool
    /// entry; the function is stored as given.
    pub fn new(def: FunctionDefinition, call_func: ToolCallFunc) -> Self {
        Self {
            spec: OpenAiToolSpec::function((&def).into()),
            call_func,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.function.name
    }

    pub fn description(&self) -> &str {
        &self.spec.function.description
    }

    /// The entry to send in the request's `tools` array.
    pub fn spec(&self) -> &OpenAiToolSpec {
        &self.spec
    }

    /// Run the wrapped function with the caller's context.
    ///
    /// The result, error included, is returned exactly as the function
    /// produced it.
    pub async fn call(&self, ctx: &CallContext, input: &str) -> Result<String, ToolError> {
        debug!(tool = %self.name(), input_len = input.len(), "Calling tool");

        let result = (self.call_func)(ctx.clone(), input.to_string()).await;
        if let Err(e) = &result {
            warn!(tool = %self.name(), error = %e, "Tool call failed");
        }
        result
    }
}

#[async_trait]
impl Tool for OpenAiTool {
    fn name(&self) -> &str {
        OpenAiTool::name(self)
    }

    fn description(&self) -> &str {
        OpenAiTool::description(self)
    }

    async fn call(&self, ctx: &CallContext, input: &str) -> Result<String, ToolError> {
        OpenAiTool::call(self, ctx, input).await
    }
}

impl std::fmt::Debug for OpenAiTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTool")
            .field("spec", &self.spec)
            .field("call_func", &"<function>")
            .finish()
    }
}
