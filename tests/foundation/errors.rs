//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use roomgraph_foundation::{DocumentFormat, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_io() {
    let err = Error::io("failed to open file 'scene.json'");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(format!("{err}").contains("scene.json"));
}

#[test]
fn error_parse_messagepack() {
    let err = Error::parse(DocumentFormat::MessagePack, "invalid marker");
    let msg = format!("{err}");
    assert!(msg.contains("MessagePack"));
    assert!(msg.contains("invalid marker"));
}

#[test]
fn error_config() {
    let err = Error::config("unknown field `chair`");
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(format!("{err}").contains("chair"));
}

#[test]
fn error_serialization() {
    let err = Error::serialization("key must be a string");
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    assert!(Error::validation("bad").context.is_none());
}

#[test]
fn context_frames_accumulate() {
    let ctx = ErrorContext::new()
        .with_source("scene.json")
        .with_frame("load")
        .with_frame("normalize");
    assert_eq!(ctx.stack.len(), 2);
    let msg = format!("{ctx}");
    assert!(msg.contains("in load"));
    assert!(msg.contains("in normalize"));
}
