//! Stack-trace enrichment for ordinary error values.
//!
//! This crate augments errors with captured call-stack traces and causal
//! chains without breaking `std::error::Error` conventions:
//! - [`trace`] attaches a lightweight trace to a foreign error, exactly
//!   once per causal chain, and stays transparent to downcasting
//! - [`Error`] carries a message, an optional cause, and its own trace;
//!   wrapping is idempotent so defensive layers never stack up
//! - [`format`] and [`real_cause`] render and walk the causal chain
//! - capture is bounded, pooled, and filters out the crate's own frames
//!   and the runtime's startup plumbing
//!
//! # Example
//!
//! ```
//! use errtrace::{Error, ResultExt};
//!
//! fn read_config() -> Result<String, std::io::Error> {
//!     Err(std::io::Error::other("disk offline"))
//! }
//!
//! let err = read_config().context("loading configuration").unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration");
//!
//! let rendered = errtrace::format(Some(&err));
//! assert!(rendered.starts_with("Error: loading configuration\n"));
//! assert!(rendered.ends_with("Caused by Error: disk offline\n"));
//! ```

pub mod error;
pub mod trace;

pub use error::*;
pub use trace::{capture, Location};
