//! Error enrichment with stack traces and causal chains.
//!
//! Provides the two error shapes and the utilities around them:
//! - [`Error`]: structured error with a message, an optional cause, and a
//!   trace captured at construction; wrapping is idempotent
//! - [`Traced`]: lightweight wrapper attaching a trace to a foreign error
//!   exactly once per causal chain, delegating identity to the inner value
//! - chain utilities for locating the root cause and rendering the chain
//! - `Result`/`Option` extensions for enriching errors at call sites

pub mod chain;
pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod traced;
pub mod types;

pub use chain::{find_cause, format, real_cause, Chain};
pub use constructors::ERROR_TRACE_DEPTH;
pub use extensions::{OptionExt, ResultExt};
pub use traced::{stack_trace, trace, Traced, TRACE_DEPTH};
pub use types::{BoxError, Error, Result};
