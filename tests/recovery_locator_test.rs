// ABOUTME: Unit tests for the payload locator
// ABOUTME: Tests fence stripping, payload kind discrimination, and failure cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use formcoach_core::recovery::{locate, PayloadKind, RecoveryError};

#[test]
fn test_locate_plain_object() {
    let raw = r#"{"muscleMass": 82}"#;
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Object);
    assert_eq!(span.slice(raw), raw);
}

#[test]
fn test_locate_object_with_surrounding_prose() {
    let raw = "Here is your assessment: {\"bodyFat\": 18} hope it helps!";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Object);
    assert_eq!(span.slice(raw), "{\"bodyFat\": 18}");
}

#[test]
fn test_locate_json_fenced_payload() {
    let raw = "Sure thing!\n```json\n{\"schedule\": []}\n```\nLet me know.";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Object);
    assert_eq!(span.slice(raw), "{\"schedule\": []}");
}

#[test]
fn test_locate_bare_fenced_payload() {
    let raw = "```\n[1, 2, 3]\n```";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Array);
    assert_eq!(span.slice(raw), "[1, 2, 3]");
}

#[test]
fn test_locate_array_before_object_picks_array() {
    let raw = "[{\"day\": 1}]";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Array);
    assert_eq!(span.slice(raw), raw);
}

#[test]
fn test_locate_object_before_array_picks_object() {
    let raw = "{\"days\": [1, 2]}";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Object);
}

#[test]
fn test_locate_uses_last_closing_bracket() {
    let raw = "{\"a\": {\"b\": 1}} trailing {\"x\": 2}";
    let span = locate(raw).unwrap();
    // The last `}` belongs to the trailing fragment, so the candidate
    // brackets both objects; the repair ladder sorts the rest out.
    assert_eq!(span.slice(raw), raw);
}

#[test]
fn test_locate_truncated_payload_extends_to_end() {
    let raw = "{\"schedule\": [1, 2";
    let span = locate(raw).unwrap();
    assert_eq!(span.kind, PayloadKind::Object);
    assert_eq!(span.slice(raw), raw);
}

#[test]
fn test_locate_no_brackets_fails() {
    let raw = "I could not analyze this image.";
    let error = locate(raw).unwrap_err();
    assert!(matches!(error, RecoveryError::NoPayloadFound { .. }));
}

#[test]
fn test_locate_close_before_open_fails() {
    let raw = "} nothing opens here {";
    let error = locate(raw).unwrap_err();
    assert!(matches!(error, RecoveryError::NoPayloadFound { .. }));
}

#[test]
fn test_locate_preview_is_bounded() {
    let raw = "no payload ".repeat(200);
    let error = locate(&raw).unwrap_err();
    let RecoveryError::NoPayloadFound { preview } = error else {
        panic!("expected NoPayloadFound");
    };
    assert!(preview.chars().count() <= 300);
}

#[test]
fn test_span_invariant_end_after_start() {
    let raw = "prose {\"a\": 1} more prose";
    let span = locate(raw).unwrap();
    assert!(span.end > span.start);
}
