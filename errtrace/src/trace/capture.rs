//! Call-stack capture with internal-frame filtering.
//!
//! Capture is two-phase: a raw instruction-pointer walk into a pooled
//! buffer, then per-address symbol resolution. Frames that cannot be
//! resolved to a file and line are omitted rather than reported half-empty,
//! and frames belonging to this crate or to the runtime's own plumbing
//! never appear in the result.

use super::location::Location;
use super::pool::FRAME_POOL;
use std::ffi::c_void;
use tracing::trace;

/// Extra raw-address slots collected beyond the requested depth, covering
/// frames the namespace filter later removes.
const SLACK: usize = 10;

/// Namespaces whose frames never appear in a captured trace: this crate's
/// own internals, the capture machinery, and the runtime's
/// startup/scheduler/test-harness plumbing.
const INTERNAL_NAMESPACES: &[&str] = &[
    "errtrace::",
    "backtrace::",
    "core::",
    "alloc::",
    "std::rt::",
    "std::sys::",
    "std::panicking::",
    "std::panic::",
    "std::thread::",
    "std::process::",
    "test::",
    "__rust",
    "__libc_start_main",
    "_start",
    "start_thread",
    "rust_begin_unwind",
];

fn is_internal(function: &str) -> bool {
    let name = function.strip_prefix('<').unwrap_or(function);
    INTERNAL_NAMESPACES.iter().any(|ns| name.starts_with(ns))
        || function.contains(" as errtrace::")
}

/// Capture the current call stack as a list of [`Location`]s.
///
/// Frames are ordered innermost-first: the first element is the
/// application frame closest to this call. Frames from the namespaces in
/// the filter table above are excluded, so the library's own construction
/// layers never show up regardless of how deeply a constructor funnels
/// before capturing.
///
/// `skip` discards that many qualifying frames before collection starts;
/// most callers pass `0`. `max_depth` bounds the result; `0` yields an
/// empty trace without touching the buffer pool.
#[must_use]
pub fn capture(skip: usize, max_depth: usize) -> Vec<Location> {
    if max_depth == 0 {
        return Vec::new();
    }

    let budget = max_depth.saturating_add(skip).saturating_add(SLACK);
    let mut pcs = FRAME_POOL.acquire(budget);
    backtrace::trace(|frame| {
        pcs.push(frame.ip() as usize);
        pcs.len() < budget
    });

    let mut locations = Vec::with_capacity(max_depth.min(pcs.len()));
    let mut remaining_skip = skip;
    for &pc in pcs.iter() {
        if locations.len() == max_depth {
            break;
        }
        backtrace::resolve(pc as *mut c_void, |symbol| {
            if locations.len() == max_depth {
                return;
            }
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            let function = symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_default();
            if is_internal(&function) {
                return;
            }
            if remaining_skip > 0 {
                remaining_skip -= 1;
                return;
            }
            locations.push(Location::new(file.display().to_string(), line, function));
        });
    }

    trace!(frames = locations.len(), "captured stack trace");
    locations
}
