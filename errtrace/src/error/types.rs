//! Core error types and definitions.

use crate::trace::Location;
use std::sync::Arc;

/// Type-erased foreign error: the currency accepted at wrapping boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Structured error carrying a message, an optional cause, and a stack
/// trace captured at construction.
///
/// Cloning is cheap: clones share the same inner record. That sharing is
/// also how idempotent wrapping keeps a causal chain from growing
/// redundant layers — wrapping an `Error` hands back a handle to the
/// record that already exists.
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// Message; empty means "use the cause's message".
    pub text: String,
    /// The error that caused this one, if any.
    pub cause: Option<BoxError>,
    /// Stack trace captured when the error was created.
    pub trace: Vec<Location>,
}

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
