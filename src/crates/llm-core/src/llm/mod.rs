//! LLM call configuration and tool-calling types.
//!
//! This module holds the provider-agnostic pieces that LLM clients and chains
//! agree on:
//!
//! - [`options`] - functional [`CallOption`]s and the [`CallOptions`] record
//! - [`tools`] - [`FunctionDefinition`] and the [`Tool`] trait
//!
//! Concrete clients live in the `llm` crate; chain-level option handling
//! lives in the `chains` crate.

pub mod options;
pub mod tools;

pub use options::{
    streaming_func, CallOption, CallOptionTarget, CallOptions, StreamingFunc, StreamingOptions,
};
pub use tools::{FunctionDefinition, Tool};
