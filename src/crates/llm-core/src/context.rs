//! Cancellation and deadline context passed through LLM and tool calls.
//!
//! A [`CallContext`] is handed to streaming callbacks, callback handlers and
//! tool invocation functions so that work started on behalf of a caller can
//! observe when that caller gives up.
//!
//! # Example
//!
//! ```rust
//! use llm_core::CallContext;
//! use std::time::Duration;
//!
//! let ctx = CallContext::new().with_timeout(Duration::from_secs(30));
//! let child = ctx.child();
//!
//! ctx.cancel();
//! assert!(child.is_cancelled());
//! ```

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation token plus optional deadline.
///
/// Cloning a context shares the same token: cancelling any clone cancels all
/// of them. Use [`CallContext::child`] for a context that can be cancelled
/// independently of its parent.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A background context: never cancelled, no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Set a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Derive a context that is cancelled with this one but can also be
    /// cancelled on its own.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Cancelled or expired.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    /// The underlying token, for `tokio::select!` against other futures.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }
}
