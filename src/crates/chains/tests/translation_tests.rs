//! Translating chain options into client options: streaming function and
//! callback handler reconciliation.

use async_trait::async_trait;
use chains::{
    get_llm_call_options, with_callback, with_max_tokens, with_model, with_streaming_func,
    with_temperature,
};
use llm_core::callbacks::CallbackHandler;
use llm_core::llm::{streaming_func, CallOptions};
use llm_core::CallContext;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Handler that records every streamed chunk.
#[derive(Default)]
struct RecordingHandler {
    chunks: Mutex<Vec<Vec<u8>>>,
}

impl RecordingHandler {
    fn chunks(&self) -> Vec<Vec<u8>> {
        self.chunks.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallbackHandler for RecordingHandler {
    async fn handle_streaming_func(&self, _ctx: &CallContext, chunk: &[u8]) {
        self.chunks.lock().unwrap().push(chunk.to_vec());
    }
}

#[tokio::test]
async fn test_no_function_and_no_handler_yields_none() {
    let translated = get_llm_call_options(vec![with_model("gpt-4o")]);
    let opts = CallOptions::from_options(&translated);

    assert_eq!(opts.model.as_deref(), Some("gpt-4o"));
    assert!(opts.streaming_func.is_none());
}

#[tokio::test]
async fn test_handler_only_synthesizes_forwarding_function() {
    let handler = Arc::new(RecordingHandler::default());
    let translated = get_llm_call_options(vec![with_callback(handler.clone())]);
    let opts = CallOptions::from_options(&translated);

    let f = opts.streaming_func.expect("streaming function synthesized");
    let result = f(CallContext::new(), b"chunk-1".to_vec()).await;

    assert!(result.is_ok());
    assert_eq!(handler.chunks(), vec![b"chunk-1".to_vec()]);
}

#[tokio::test]
async fn test_synthesized_function_forwards_each_chunk_once() {
    let handler = Arc::new(RecordingHandler::default());
    let opts = CallOptions::from_options(&get_llm_call_options(vec![with_callback(
        handler.clone(),
    )]));

    let ctx = CallContext::new();
    for chunk in [&b"a"[..], &b"bc"[..], &b""[..]] {
        opts.stream_chunk(&ctx, chunk).await.unwrap();
    }

    assert_eq!(
        handler.chunks(),
        vec![b"a".to_vec(), b"bc".to_vec(), Vec::new()]
    );
}

#[tokio::test]
async fn test_explicit_function_takes_precedence_over_handler() {
    let handler = Arc::new(RecordingHandler::default());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let explicit = streaming_func(move |_ctx, _chunk| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    });

    // Handler first, function second: order must not matter.
    let translated = get_llm_call_options(vec![
        with_callback(handler.clone()),
        with_streaming_func(explicit),
    ]);
    let opts = CallOptions::from_options(&translated);

    opts.stream_chunk(&CallContext::new(), b"token").await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(handler.chunks().is_empty());
}

#[tokio::test]
async fn test_numeric_options_survive_translation() {
    let handler = Arc::new(RecordingHandler::default());
    let translated = get_llm_call_options(vec![
        with_model("llama3"),
        with_callback(handler),
        with_temperature(0.2),
        with_max_tokens(64),
        with_temperature(0.8),
    ]);
    let opts = CallOptions::from_options(&translated);

    assert_eq!(opts.model.as_deref(), Some("llama3"));
    assert_eq!(opts.temperature, Some(0.8));
    assert_eq!(opts.max_tokens, Some(64));
    assert!(opts.streaming_func.is_some());
}

#[tokio::test]
async fn test_appended_option_overrides_client_level_streaming_func() {
    let early = Arc::new(AtomicUsize::new(0));
    let counter = early.clone();
    let client_level = llm_core::llm::options::with_streaming_func(Some(streaming_func(
        move |_ctx, _chunk| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        },
    )));

    // No chain-level function or handler, so the appended option clears it.
    let opts = CallOptions::from_options(&get_llm_call_options(vec![client_level]));
    assert!(opts.streaming_func.is_none());
    opts.stream_chunk(&CallContext::new(), b"x").await.unwrap();
    assert_eq!(early.load(Ordering::SeqCst), 0);
}
