//! Context attachment for `Result` and `Option` at call sites.

use super::traced::trace;
use super::types::{BoxError, Error};

/// Extension methods enriching the error arm of a `Result`.
///
/// The `Ok` payload passes through untouched whatever its shape, so call
/// sites returning several values (as a tuple) keep their results
/// unchanged; only the error component is checked and enriched.
pub trait ResultExt<T> {
    /// Attach a lightweight stack trace to the error, if any.
    ///
    /// Idempotent: a chain that already carries a trace is left alone.
    fn traced(self) -> std::result::Result<T, BoxError>;

    /// Wrap the error, if any, into a structured [`Error`].
    ///
    /// Idempotent: an error that already is an [`Error`] is returned
    /// unchanged.
    fn wrap_err(self) -> std::result::Result<T, Error>;

    /// Wrap the error, if any, into an [`Error`] carrying `text`.
    fn context(self, text: impl Into<String>) -> std::result::Result<T, Error>;

    /// Like [`context`](Self::context), computing the message only on the
    /// error path.
    fn with_context<F, S>(self, f: F) -> std::result::Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    fn traced(self) -> std::result::Result<T, BoxError> {
        self.map_err(|err| trace(err.into()))
    }

    fn wrap_err(self) -> std::result::Result<T, Error> {
        self.map_err(|err| Error::wrap(err))
    }

    fn context(self, text: impl Into<String>) -> std::result::Result<T, Error> {
        self.map_err(|err| Error::with_cause(text, err))
    }

    fn with_context<F, S>(self, f: F) -> std::result::Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| Error::with_cause(f(), err))
    }
}

/// Extension methods turning an absent `Option` into a leaf [`Error`].
pub trait OptionExt<T> {
    /// Replace `None` with a leaf error carrying `text`.
    fn context(self, text: impl Into<String>) -> std::result::Result<T, Error>;

    /// Like [`context`](Self::context), computing the message only when
    /// the value is absent.
    fn with_context<F, S>(self, f: F) -> std::result::Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, text: impl Into<String>) -> std::result::Result<T, Error> {
        self.ok_or_else(|| Error::new(text))
    }

    fn with_context<F, S>(self, f: F) -> std::result::Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.ok_or_else(|| Error::new(f()))
    }
}
