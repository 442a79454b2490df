//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
fn display_uses_message() {
    let err = Error::not_found("Ticket not found.");
    assert_eq!(err.to_string(), "Ticket not found.");
}

#[rstest]
fn new_returns_no_trace_id_out_of_scope() {
    let err = Error::internal("boom");
    assert!(err.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let err = TraceId::scope(trace_id, async { Error::conflict("taken") }).await;
    assert_eq!(err.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let err = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(err.trace_id(), Some("abc"));
}
