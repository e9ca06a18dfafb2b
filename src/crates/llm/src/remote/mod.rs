//! Remote LLM provider adapters.
//!
//! # Providers
//!
//! - **OpenAI** - tool/function-calling adapter

pub mod openai;

pub use openai::OpenAiTool;
