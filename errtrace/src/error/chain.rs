//! Utilities operating across a causal chain.

use super::types::Error;

/// Iterator over an error and its transitive `source()` chain.
pub struct Chain<'a> {
    next: Option<&'a (dyn std::error::Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a chain walk at `err` (inclusive).
    #[must_use]
    pub fn new(err: &'a (dyn std::error::Error + 'static)) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn std::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next?;
        self.next = cur.source();
        Some(cur)
    }
}

/// Render `err` for human consumption.
///
/// `None` renders as the empty string, a structured [`Error`] renders its
/// full causal chain, and any other error renders its `Display` text.
#[must_use]
pub fn format(err: Option<&(dyn std::error::Error + 'static)>) -> String {
    let Some(err) = err else {
        return String::new();
    };
    match err.downcast_ref::<Error>() {
        Some(structured) => format!("{structured:#}"),
        None => err.to_string(),
    }
}

/// Deepest error reachable through a chain of structured [`Error`] links.
///
/// Descends while the current link is an [`Error`] with a cause, and
/// returns the last link reached: the leaf `Error` when the chain ends in
/// one, or the foreign error the chain terminates in.
#[must_use]
pub fn real_cause<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    let mut cur = err;
    while let Some(structured) = cur.downcast_ref::<Error>() {
        match structured.cause() {
            Some(cause) => cur = cause,
            None => break,
        }
    }
    cur
}

/// First link of concrete type `E` anywhere in `err`'s causal chain.
///
/// Sentinel errors are types in Rust, so a successful lookup through the
/// chain is the identity check that keeps working across wrapping layers.
#[must_use]
pub fn find_cause<'a, E>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a E>
where
    E: std::error::Error + 'static,
{
    Chain::new(err).find_map(|link| link.downcast_ref::<E>())
}
