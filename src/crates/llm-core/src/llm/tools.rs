//! Function-calling tool abstractions.
//!
//! - [`FunctionDefinition`] describes a function to the model: name,
//!   description, JSON Schema parameters and whether the provider should
//!   enforce the schema strictly.
//! - [`Tool`] is what an agent executes when the model asks for a function.
//!
//! # Example
//!
//! ```rust
//! use llm_core::llm::FunctionDefinition;
//! use serde_json::json;
//!
//! let def = FunctionDefinition::new("get_weather", "Get current weather for a location")
//!     .with_parameters(json!({
//!         "type": "object",
//!         "properties": {
//!             "location": {"type": "string"}
//!         },
//!         "required": ["location"]
//!     }))
//!     .with_strict(true);
//!
//! assert_eq!(def.name, "get_weather");
//! assert!(def.strict);
//! ```

use crate::context::CallContext;
use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Definition of a function that an LLM can call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// The unique name/identifier for this function.
    pub name: String,

    /// Human-readable description of what this function does.
    ///
    /// The model uses this to decide when to call it.
    pub description: String,

    /// JSON Schema describing the function's parameters.
    #[serde(default)]
    pub parameters: JsonValue,

    /// Ask the provider to follow the schema exactly.
    #[serde(default)]
    pub strict: bool,
}

impl FunctionDefinition {
    /// Create a new function definition with name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: JsonValue::Null,
            strict: false,
        }
    }

    /// Add a JSON Schema for the function's parameters.
    pub fn with_parameters(mut self, parameters: JsonValue) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A tool an agent can invoke on the model's behalf.
///
/// Implementations must honour the caller's [`CallContext`]: long-running
/// tools should stop when it is cancelled.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Run the tool with the model-provided input.
    async fn call(&self, ctx: &CallContext, input: &str) -> Result<String, ToolError>;
}
