//! Stack-trace capture.
//!
//! Provides the frame capturer and its supporting pieces:
//! - [`Location`]: one resolved frame (file, line, qualified function)
//! - [`capture`]: bounded, filtered snapshot of the current call stack
//! - a pooled raw-address buffer shared by all captures
//!
//! Traces are ordered innermost-first and never contain frames from this
//! crate's own internals or from the runtime's startup plumbing.

mod capture;
mod location;
mod pool;

pub use capture::capture;
pub use location::Location;
