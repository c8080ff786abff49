//! Display and trait implementations for [`Error`].

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    /// `{}` renders the message, falling back to the cause's message when
    /// the text is empty. `{:#}` renders the whole causal chain with the
    /// captured stack traces, one block per link.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_chain(f);
        }
        if !self.inner.text.is_empty() {
            return f.write_str(&self.inner.text);
        }
        if let Some(cause) = &self.inner.cause {
            return write!(f, "{cause}");
        }
        Ok(())
    }
}

impl Error {
    // Chain rendering: blank-line separated blocks, each "Error: <message>"
    // followed by one "- <location>" line per trace entry. A terminal
    // foreign cause gets a final block with no trace lines and is not
    // descended into.
    fn fmt_chain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(self);
        let mut first = true;
        while let Some(cur) = cause {
            if !first {
                f.write_str("\nCaused by ")?;
            }
            first = false;
            writeln!(f, "Error: {cur}")?;
            match cur.downcast_ref::<Self>() {
                Some(err) => {
                    for location in err.stack_trace() {
                        writeln!(f, "- {location}")?;
                    }
                    cause = err.cause();
                }
                None => cause = None,
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause()
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Error;

    #[test]
    fn display_prefers_the_text() {
        let err = Error::with_cause("outer", Error::new("inner"));
        assert_eq!(err.to_string(), "outer");
    }

    #[test]
    fn display_of_an_empty_leaf_is_empty() {
        let err = Error::new("");
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn display_falls_back_to_the_cause() {
        let err = Error::with_cause("", Error::new("root"));
        assert_eq!(err.to_string(), "root");
    }
}
