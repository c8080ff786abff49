//! Error constructors and accessors.

use super::types::{BoxError, Error, ErrorInner};
use crate::trace::{capture, Location};
use std::sync::Arc;

/// Maximum stack depth captured by [`Error`] constructors.
pub const ERROR_TRACE_DEPTH: usize = 20;

impl Error {
    /// Create a leaf error with the given message.
    ///
    /// The stack trace is captured at the call site.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), None)
    }

    /// Create an error with the given message, caused by `cause`.
    #[must_use]
    pub fn with_cause(text: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::build(text.into(), Some(cause.into()))
    }

    /// Wrap `err` into an [`Error`], or return it unchanged when it
    /// already is one.
    ///
    /// Wrapping never nests redundantly: when `err` is itself an `Error`
    /// the returned handle shares its existing inner record. Otherwise a
    /// new error with an empty message and `cause = err` is created, with
    /// the stack trace captured at the call site.
    #[must_use]
    pub fn wrap(err: impl Into<BoxError>) -> Self {
        match err.into().downcast::<Self>() {
            Ok(already) => *already,
            Err(foreign) => Self::build(String::new(), Some(foreign)),
        }
    }

    // Public constructors funnel through here so the trace is captured
    // exactly once per construction. The capturer filters this crate's
    // frames by namespace, so the funnel depth needs no skip bookkeeping.
    fn build(text: String, cause: Option<BoxError>) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                text,
                cause,
                trace: capture(0, ERROR_TRACE_DEPTH),
            }),
        }
    }

    /// The stored cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn std::error::Error + 'static))
    }

    /// The stack trace captured when this error was created.
    #[must_use]
    pub fn stack_trace(&self) -> &[Location] {
        &self.inner.trace
    }
}
