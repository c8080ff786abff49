//! Behavior of the frame capturer: ordering, filtering, skip, and depth.

use errtrace::{capture, Location};

#[inline(never)]
fn snapshot(depth: usize) -> Vec<Location> {
    capture(0, depth)
}

#[inline(never)]
fn recurse(n: usize, depth: usize) -> Vec<Location> {
    if n == 0 {
        capture(0, depth)
    } else {
        recurse(n - 1, depth)
    }
}

#[inline(never)]
fn skip_pair() -> (Vec<Location>, Vec<Location>) {
    (capture(0, 20), capture(1, 20))
}

#[inline(never)]
fn call_skip_pair() -> (Vec<Location>, Vec<Location>) {
    skip_pair()
}

#[test]
fn first_frame_is_the_capturing_caller() {
    let trace = snapshot(20);
    assert!(!trace.is_empty(), "capture must see the test stack");
    let first = &trace[0];
    assert!(
        first.function().contains("snapshot"),
        "unexpected first frame: {first}"
    );
    assert!(first.line() > 0);
    assert!(!first.file().is_empty());
}

#[test]
fn no_internal_frames_are_reported() {
    for loc in snapshot(150) {
        let name = loc.function();
        assert!(!name.contains("errtrace::"), "library frame leaked: {loc}");
        assert!(
            !name.starts_with("backtrace"),
            "capture machinery leaked: {loc}"
        );
    }
}

#[test]
fn depth_bound_is_exact() {
    let trace = recurse(40, 8);
    assert_eq!(trace.len(), 8);
    for loc in &trace {
        assert!(loc.function().contains("recurse"), "unexpected frame: {loc}");
    }
}

#[test]
fn zero_depth_is_an_empty_fast_path() {
    assert!(capture(0, 0).is_empty());
}

#[test]
fn skip_discards_qualifying_frames() {
    let (full, skipped) = call_skip_pair();
    assert!(full.len() >= 2);
    assert!(!skipped.is_empty());
    // skipping one frame drops `skip_pair` itself, so the first reported
    // frame of the skipped capture is the full capture's second frame
    assert_eq!(skipped[0].function(), full[1].function());
}

#[test]
fn locations_render_file_line_and_function() {
    let trace = snapshot(5);
    let first = &trace[0];
    let rendered = first.to_string();
    assert!(rendered.contains(&format!("{}:{}", first.file(), first.line())));
    assert!(rendered.ends_with(&format!("({})", first.function())));
}
