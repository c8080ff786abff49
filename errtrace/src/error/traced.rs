//! Lightweight trace attachment for foreign errors.

use super::chain::Chain;
use super::types::{BoxError, Error};
use crate::trace::{capture, Location};

/// Maximum stack depth captured by [`trace`].
pub const TRACE_DEPTH: usize = 150;

/// Lightweight wrapper that attaches a stack trace to a foreign error.
///
/// Message rendering and single-step unwrapping both delegate to the
/// wrapped value, so downcast-based comparisons against the original
/// error keep working as if no wrapping had occurred.
#[derive(Debug, thiserror::Error)]
#[error("{inner}")]
pub struct Traced {
    #[source]
    inner: BoxError,
    trace: Vec<Location>,
}

impl Traced {
    /// The stack trace attached when the wrapper was created.
    #[must_use]
    pub fn stack_trace(&self) -> &[Location] {
        &self.trace
    }

    /// The wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn std::error::Error + 'static) {
        self.inner.as_ref()
    }

    /// Unwrap into the original error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

/// Attach a stack trace to `err`, unless its causal chain already carries
/// one.
///
/// When any link of the `source()` chain is already a [`Traced`] wrapper
/// or a structured [`Error`], `err` comes back untouched — a chain never
/// accumulates a second trace no matter how many layers defensively
/// re-trace it. Use [`find_cause`](super::chain::find_cause) to compare
/// the result against sentinel error types.
#[must_use]
pub fn trace(err: BoxError) -> BoxError {
    if has_trace(err.as_ref()) {
        return err;
    }
    Box::new(Traced {
        inner: err,
        trace: capture(0, TRACE_DEPTH),
    })
}

/// First stack trace attached anywhere in `err`'s causal chain.
///
/// Both [`Traced`] wrappers and structured [`Error`] links count as trace
/// carriers; `None` means the chain was never annotated.
#[must_use]
pub fn stack_trace<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a [Location]> {
    Chain::new(err).find_map(|link| {
        link.downcast_ref::<Traced>()
            .map(Traced::stack_trace)
            .or_else(|| link.downcast_ref::<Error>().map(Error::stack_trace))
    })
}

// A chain counts as annotated when any link already carries a trace.
fn has_trace(err: &(dyn std::error::Error + 'static)) -> bool {
    Chain::new(err).any(|link| link.is::<Traced>() || link.is::<Error>())
}
