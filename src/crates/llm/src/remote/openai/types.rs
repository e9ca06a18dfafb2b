//! OpenAI tool wire types.
//!
//! These serialize to the entries of the `tools` array in a chat completions
//! request:
//!
//! ```json
//! {
//!   "type": "function",
//!   "function": {
//!     "name": "get_weather",
//!     "description": "Get current weather for a location",
//!     "parameters": {"type": "object", "properties": {}},
//!     "strict": true
//!   }
//! }
//! ```

use llm_core::llm::FunctionDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Kind of tool. OpenAI currently only accepts functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    #[default]
    Function,
}

/// Function description inside an OpenAI tool entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiFunctionDefinition {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub parameters: JsonValue,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
}

impl From<&FunctionDefinition> for OpenAiFunctionDefinition {
    fn from(def: &FunctionDefinition) -> Self {
        Self {
            name: def.name.clone(),
            description: def.description.clone(),
            parameters: def.parameters.clone(),
            strict: def.strict,
        }
    }
}

/// One entry of the request's `tools` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiToolSpec {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: OpenAiFunctionDefinition,
}

impl OpenAiToolSpec {
    /// A `"function"` tool entry.
    pub fn function(function: OpenAiFunctionDefinition) -> Self {
        Self {
            tool_type: ToolType::Function,
            function,
        }
    }
}
