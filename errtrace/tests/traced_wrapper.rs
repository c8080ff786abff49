//! Lightweight wrapper behavior: delegation, idempotence, trace lookup.

use errtrace::{find_cause, stack_trace, trace, BoxError, Error, ResultExt, TRACE_DEPTH};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("file vanished")]
struct FileVanished;

#[derive(Debug, thiserror::Error)]
#[error("lookup failed")]
struct LookupFailed {
    #[source]
    source: BoxError,
}

fn thin_ptr(err: &BoxError) -> *const () {
    let wide: *const (dyn std::error::Error + Send + Sync) = &**err;
    wide.cast::<()>()
}

#[test]
fn message_passes_through() {
    let wrapped = trace(Box::new(FileVanished));
    assert_eq!(wrapped.to_string(), "file vanished");
}

#[test]
fn identity_delegates_to_the_wrapped_error() {
    let wrapped = trace(Box::new(FileVanished));
    let source = wrapped
        .source()
        .expect("the wrapper must expose its inner error");
    assert!(source.downcast_ref::<FileVanished>().is_some());
    assert_eq!(find_cause::<FileVanished>(&*wrapped), Some(&FileVanished));
}

#[test]
fn a_trace_is_attached_and_bounded() {
    let wrapped = trace(Box::new(FileVanished));
    let trace = stack_trace(&*wrapped).expect("a trace must be attached");
    assert!(!trace.is_empty());
    assert!(trace.len() <= TRACE_DEPTH);
}

#[test]
fn tracing_twice_returns_the_same_value() {
    let once = trace(Box::new(FileVanished));
    let first = thin_ptr(&once);
    let twice = trace(once);
    assert_eq!(thin_ptr(&twice), first);
}

#[test]
fn already_structured_chains_are_left_alone() {
    let structured: BoxError = Box::new(Error::new("boom"));
    let first = thin_ptr(&structured);
    let retraced = trace(structured);
    assert_eq!(thin_ptr(&retraced), first);
}

#[test]
fn a_traced_link_deeper_in_the_chain_blocks_retracing() {
    let inner = trace(Box::new(FileVanished));
    let outer: BoxError = Box::new(LookupFailed { source: inner });
    let first = thin_ptr(&outer);
    let retraced = trace(outer);
    assert_eq!(thin_ptr(&retraced), first);
    // the lookup still finds the trace attached to the inner link
    assert!(stack_trace(&*retraced).is_some());
}

fn might_fail(fail: bool) -> Result<(u32, &'static str), std::io::Error> {
    if fail {
        Err(std::io::Error::other("disk offline"))
    } else {
        Ok((7, "ready"))
    }
}

#[test]
fn ok_results_pass_through_untouched() {
    let value = might_fail(false).traced().expect("ok must pass through");
    assert_eq!(value, (7, "ready"));
}

#[test]
fn err_results_gain_a_trace() {
    let err = might_fail(true).traced().unwrap_err();
    assert_eq!(err.to_string(), "disk offline");
    let trace = stack_trace(&*err).expect("a trace must be attached");
    assert!(!trace.is_empty());
    assert!(trace.len() <= TRACE_DEPTH);
}
