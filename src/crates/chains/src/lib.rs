//! Chain-level helpers on top of `llm-core`.
//!
//! Chains accept the same functional call options as LLM clients, plus two
//! chain-only options: a streaming function and a callback handler. Before a
//! chain calls its model it runs [`get_llm_call_options`] to fold those two
//! into a single client-level streaming option.
//!
//! ```rust
//! use chains::{get_llm_call_options, with_callback, with_temperature};
//! use llm_core::llm::CallOptions;
//! use llm_core::LogHandler;
//! use std::sync::Arc;
//!
//! let llm_options = get_llm_call_options(vec![
//!     with_temperature(0.1),
//!     with_callback(Arc::new(LogHandler)),
//! ]);
//!
//! let opts = CallOptions::from_options(&llm_options);
//! assert_eq!(opts.temperature, Some(0.1));
//! assert!(opts.streaming_func.is_some());
//! ```

pub mod options;

pub use options::{
    get_llm_call_options, with_callback, with_max_length, with_max_tokens, with_min_length,
    with_model, with_repetition_penalty, with_seed, with_stop_words, with_streaming_func,
    with_temperature, with_top_k, with_top_p, ChainCallOption, ChainCallOptions,
};
