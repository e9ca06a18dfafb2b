//! Call options accepted by chains.
//!
//! Numeric options (`with_model`, `with_temperature`, ...) are the client's
//! own options from `llm-core` and pass straight through to the model.
//! [`with_streaming_func`] and [`with_callback`] only touch the chain's side
//! channel ([`ChainCallOptions`]); they do nothing when applied to a client's
//! [`CallOptions`](llm_core::llm::CallOptions), and numeric options do
//! nothing when applied to the side channel.

use llm_core::callbacks::CallbackHandler;
use llm_core::llm::options::{self as llm_options, streaming_func};
use llm_core::llm::{CallOption, CallOptionTarget, StreamingFunc, StreamingOptions};
use std::sync::Arc;

pub use llm_core::llm::options::{
    with_max_length, with_max_tokens, with_min_length, with_model, with_repetition_penalty,
    with_seed, with_stop_words, with_temperature, with_top_k, with_top_p,
};

/// Options accepted by chain calls. Same type as the client's options.
pub type ChainCallOption = CallOption;

/// Chain-only settings collected from a list of [`ChainCallOption`]s.
#[derive(Clone, Default)]
pub struct ChainCallOptions {
    /// Called for each chunk of a streaming response.
    /// Return an error to stop streaming early.
    pub streaming_func: Option<StreamingFunc>,

    /// Handler observing the chain's calls.
    pub callback_handler: Option<Arc<dyn CallbackHandler>>,
}

impl ChainCallOptions {
    /// Apply `options` in order to a fresh record.
    pub fn from_options(options: &[ChainCallOption]) -> Self {
        let mut opts = Self::default();
        for option in options {
            option.apply(&mut opts);
        }
        opts
    }

    /// The streaming function the model should receive: the explicit one if
    /// set, else one that forwards to the callback handler, else `None`.
    pub fn resolve_streaming_func(&self) -> Option<StreamingFunc> {
        match (&self.streaming_func, &self.callback_handler) {
            (Some(f), _) => Some(f.clone()),
            (None, Some(handler)) => Some(handler_streaming_func(handler.clone())),
            (None, None) => None,
        }
    }
}

impl StreamingOptions for ChainCallOptions {
    fn set_streaming_func(&mut self, streaming_func: Option<StreamingFunc>) {
        self.streaming_func = streaming_func;
    }

    fn set_callback_handler(&mut self, handler: Option<Arc<dyn CallbackHandler>>) {
        self.callback_handler = handler;
    }
}

impl CallOptionTarget for ChainCallOptions {
    fn streaming_options(&mut self) -> Option<&mut dyn StreamingOptions> {
        Some(self)
    }
}

impl std::fmt::Debug for ChainCallOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainCallOptions")
            .field("has_streaming_func", &self.streaming_func.is_some())
            .field("has_callback_handler", &self.callback_handler.is_some())
            .finish()
    }
}

/// Stream responses through `streaming_func`.
pub fn with_streaming_func(streaming_func: StreamingFunc) -> ChainCallOption {
    CallOption::new(move |target| {
        if let Some(side) = target.streaming_options() {
            side.set_streaming_func(Some(streaming_func.clone()));
        }
    })
}

/// Observe the call with a custom callback handler.
pub fn with_callback(handler: Arc<dyn CallbackHandler>) -> ChainCallOption {
    CallOption::new(move |target| {
        if let Some(side) = target.streaming_options() {
            side.set_callback_handler(Some(handler.clone()));
        }
    })
}

/// Streaming function that hands every chunk to the handler and never
/// stops the stream.
fn handler_streaming_func(handler: Arc<dyn CallbackHandler>) -> StreamingFunc {
    streaming_func(move |ctx, chunk| {
        let handler = handler.clone();
        async move {
            handler.handle_streaming_func(&ctx, &chunk).await;
            Ok(())
        }
    })
}

/// Translate chain options into the options passed to the model.
///
/// Returns `options` unchanged with one client-level streaming option
/// appended; see [`ChainCallOptions::resolve_streaming_func`] for which
/// function it carries.
pub fn get_llm_call_options(mut options: Vec<ChainCallOption>) -> Vec<CallOption> {
    let chain_opts = ChainCallOptions::from_options(&options);
    options.push(llm_options::with_streaming_func(
        chain_opts.resolve_streaming_func(),
    ));
    options
}
