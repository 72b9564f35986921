//! Trace-chain recording and rendering.

use lantern_logger::Logger;
use lantern_logger::test_support::CaptureWriter;
use std::sync::{Arc, Mutex};

fn capture_logger() -> (CaptureWriter, Logger) {
    let capture = CaptureWriter::new();
    let logger = Logger::new().with_writer(Arc::new(Mutex::new(capture.clone())));
    (capture, logger)
}

#[test]
fn traced_child_renders_exactly_one_line() {
    let (capture, root) = capture_logger();
    let child = root.child(Some("B"), true);
    child.info("hello");

    let contents = capture.contents();
    assert_eq!(contents.matches("Trace: Parent created at").count(), 1);
    assert!(contents.contains(&root.creation_info().location));
    assert!(contents.contains(&child.creation_info().location));
}

#[test]
fn nested_traced_children_render_oldest_first() {
    let (capture, root) = capture_logger();
    let a = root.child(Some("A"), true);
    let b = a.child(Some("B"), true);
    b.info("payload");

    let contents = capture.contents();
    assert_eq!(contents.matches("Trace: Parent created at").count(), 2);

    if a.creation_info().location == b.creation_info().location {
        // Without debug info every site resolves to the sentinel and
        // ordering is not observable.
        return;
    }
    let oldest = format!(
        "Trace: Parent created at {}, Child created at {}",
        root.creation_info().location,
        a.creation_info().location
    );
    let newest = format!(
        "Trace: Parent created at {}, Child created at {}",
        a.creation_info().location,
        b.creation_info().location
    );
    let first = contents.find(&oldest).expect("oldest link rendered");
    let second = contents.find(&newest).expect("newest link rendered");
    assert!(first < second, "oldest ancestor must render first");
}

#[test]
fn untraced_child_renders_nothing() {
    let (capture, root) = capture_logger();
    let child = root.child(Some("B"), false);
    child.info("plain");

    assert!(!capture.contains("Trace:"));
}

#[test]
fn trace_opt_in_is_per_edge_not_inherited() {
    let (capture, root) = capture_logger();
    let traced = root.child(Some("A"), true);
    let untraced = traced.child(Some("B"), false);
    untraced.info("no chain here");

    assert!(!capture.contains("Trace:"));
    assert!(untraced.trace_link().is_none());
}

#[test]
fn untraced_parent_does_not_leak_into_traced_grandchild() {
    let (capture, root) = capture_logger();
    let middle = root.child(Some("A"), false);
    let leaf = middle.child(Some("B"), true);
    leaf.info("one edge only");

    assert_eq!(capture.contents().matches("Trace: Parent created at").count(), 1);
}
