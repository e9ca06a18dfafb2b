//! Functional call options for LLM clients.
//!
//! A [`CallOption`] is a mutator applied to an option target before a call is
//! dispatched. Targets expose narrow capabilities through
//! [`CallOptionTarget`]: the numeric record ([`CallOptions`]) and the
//! streaming side channel ([`StreamingOptions`]). An option that asks for a
//! capability the target does not have does nothing, so the same option
//! value can be applied to unrelated targets without errors.
//!
//! # Example
//!
//! ```rust
//! use llm_core::llm::options::{with_max_tokens, with_model, with_temperature, CallOptions};
//!
//! let opts = CallOptions::from_options(&[
//!     with_model("gpt-4o"),
//!     with_temperature(0.2),
//!     with_max_tokens(256),
//!     with_temperature(0.7),
//! ]);
//!
//! assert_eq!(opts.model.as_deref(), Some("gpt-4o"));
//! assert_eq!(opts.temperature, Some(0.7));
//! ```

use crate::callbacks::CallbackHandler;
use crate::context::CallContext;
use crate::error::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

/// Function invoked once per streamed chunk of model output.
///
/// Returning an error tells the client to stop streaming early.
pub type StreamingFunc =
    Arc<dyn Fn(CallContext, Vec<u8>) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Wrap an async closure as a [`StreamingFunc`].
pub fn streaming_func<F, Fut>(f: F) -> StreamingFunc
where
    F: Fn(CallContext, Vec<u8>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    Arc::new(move |ctx: CallContext, chunk: Vec<u8>| f(ctx, chunk).boxed())
}

/// Numeric and sampling settings for a single call.
///
/// Build one per call; there is no shared default instance. Unset fields
/// mean "provider default". The record deserializes from configuration
/// files (every field optional) and can then be applied with
/// [`with_options`].
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallOptions {
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Top-k sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,

    /// Nucleus sampling probability mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// Seed for deterministic sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// Minimum length of the generated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length of the generated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Repetition penalty for sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,

    /// Sequences that stop generation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop_words: Vec<String>,

    /// Per-chunk streaming callback.
    #[serde(skip)]
    pub streaming_func: Option<StreamingFunc>,
}

impl CallOptions {
    /// Apply `options` in order to a fresh record. Later options win.
    pub fn from_options(options: &[CallOption]) -> Self {
        let mut opts = Self::default();
        for option in options {
            option.apply(&mut opts);
        }
        opts
    }

    /// Forward a chunk to the streaming callback, if one is set.
    pub async fn stream_chunk(&self, ctx: &CallContext, chunk: &[u8]) -> Result<()> {
        match &self.streaming_func {
            Some(f) => f(ctx.clone(), chunk.to_vec()).await,
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for CallOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallOptions")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .field("seed", &self.seed)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("repetition_penalty", &self.repetition_penalty)
            .field("stop_words", &self.stop_words)
            .field("has_streaming_func", &self.streaming_func.is_some())
            .finish()
    }
}

/// The streaming side channel: a callback and/or a handler, nothing else.
pub trait StreamingOptions {
    fn set_streaming_func(&mut self, streaming_func: Option<StreamingFunc>);

    fn set_callback_handler(&mut self, handler: Option<Arc<dyn CallbackHandler>>);
}

/// Something a [`CallOption`] can be applied to.
///
/// Each method narrows the target to one capability. Targets override only
/// the capabilities they actually have.
pub trait CallOptionTarget {
    /// The numeric options record, if this target is one.
    fn call_options(&mut self) -> Option<&mut CallOptions> {
        None
    }

    /// The streaming side channel, if this target has one.
    fn streaming_options(&mut self) -> Option<&mut dyn StreamingOptions> {
        None
    }
}

impl CallOptionTarget for CallOptions {
    fn call_options(&mut self) -> Option<&mut CallOptions> {
        Some(self)
    }
}

/// A mutator applied to a [`CallOptionTarget`] before a call.
///
/// Cheap to clone; the same option can be applied any number of times.
#[derive(Clone)]
pub struct CallOption(Arc<dyn Fn(&mut dyn CallOptionTarget) + Send + Sync>);

impl CallOption {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn CallOptionTarget) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, target: &mut dyn CallOptionTarget) {
        (self.0)(target)
    }
}

impl std::fmt::Debug for CallOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallOption(<function>)")
    }
}

fn numeric<F>(set: F) -> CallOption
where
    F: Fn(&mut CallOptions) + Send + Sync + 'static,
{
    CallOption::new(move |target| {
        if let Some(opts) = target.call_options() {
            set(opts);
        }
    })
}

/// Set the model name.
pub fn with_model(model: impl Into<String>) -> CallOption {
    let model = model.into();
    numeric(move |o| o.model = Some(model.clone()))
}

/// Set the maximum number of tokens to generate.
pub fn with_max_tokens(max_tokens: usize) -> CallOption {
    numeric(move |o| o.max_tokens = Some(max_tokens))
}

/// Set the sampling temperature.
pub fn with_temperature(temperature: f64) -> CallOption {
    numeric(move |o| o.temperature = Some(temperature))
}

/// Use top-k sampling.
pub fn with_top_k(top_k: usize) -> CallOption {
    numeric(move |o| o.top_k = Some(top_k))
}

/// Use top-p (nucleus) sampling.
pub fn with_top_p(top_p: f64) -> CallOption {
    numeric(move |o| o.top_p = Some(top_p))
}

/// Use deterministic sampling with the given seed.
pub fn with_seed(seed: i64) -> CallOption {
    numeric(move |o| o.seed = Some(seed))
}

/// Set the minimum length of the generated text.
pub fn with_min_length(min_length: usize) -> CallOption {
    numeric(move |o| o.min_length = Some(min_length))
}

/// Set the maximum length of the generated text.
pub fn with_max_length(max_length: usize) -> CallOption {
    numeric(move |o| o.max_length = Some(max_length))
}

/// Set the repetition penalty for sampling.
pub fn with_repetition_penalty(repetition_penalty: f64) -> CallOption {
    numeric(move |o| o.repetition_penalty = Some(repetition_penalty))
}

/// Set the stop words.
pub fn with_stop_words(stop_words: Vec<String>) -> CallOption {
    numeric(move |o| o.stop_words = stop_words.clone())
}

/// Set (or clear, with `None`) the streaming callback on the client's record.
pub fn with_streaming_func(streaming_func: Option<StreamingFunc>) -> CallOption {
    numeric(move |o| o.streaming_func = streaming_func.clone())
}

/// Replace the whole record, e.g. with defaults loaded from configuration.
pub fn with_options(options: CallOptions) -> CallOption {
    numeric(move |o| *o = options.clone())
}
