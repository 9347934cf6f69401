// ABOUTME: Unit tests for the form analysis normalizer
// ABOUTME: Tests score clamping, status coercion, and canned guidance defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use formcoach_core::intelligence::form::{self, FormStatus};
use serde_json::json;

#[test]
fn test_empty_object_yields_fully_populated_record() {
    let record = form::normalize(&json!({}), "squat");

    assert_eq!(record.exercise, "squat");
    assert_eq!(record.overall_score, 50.0);
    assert_eq!(record.metrics.depth.score, 50.0);
    assert_eq!(record.metrics.depth.status, FormStatus::Good);
    assert_eq!(record.improvements.len(), 1);
    assert_eq!(record.tips.len(), 1);
    assert_eq!(record.next_steps.len(), 1);
}

#[test]
fn test_overall_score_clamps() {
    assert_eq!(
        form::normalize(&json!({ "overallScore": 250 }), "squat").overall_score,
        100.0
    );
    assert_eq!(
        form::normalize(&json!({ "overallScore": -10 }), "squat").overall_score,
        0.0
    );
}

#[test]
fn test_metric_scores_clamp() {
    let record = form::normalize(
        &json!({
            "metrics": {
                "depth": { "score": 180 },
                "backAngle": { "score": -40 },
                "kneeTracking": { "score": 71 },
            }
        }),
        "squat",
    );
    assert_eq!(record.metrics.depth.score, 100.0);
    assert_eq!(record.metrics.back_angle.score, 0.0);
    assert_eq!(record.metrics.knee_tracking.score, 71.0);
}

#[test]
fn test_status_closed_set() {
    let record = form::normalize(
        &json!({
            "metrics": {
                "depth": { "status": "needs_improvement" },
                "backAngle": { "status": "poor" },
                "kneeTracking": { "status": "excellent" },
            }
        }),
        "deadlift",
    );
    assert_eq!(record.metrics.depth.status, FormStatus::NeedsImprovement);
    assert_eq!(record.metrics.back_angle.status, FormStatus::Poor);
    // Anything outside the closed set coerces to good.
    assert_eq!(record.metrics.knee_tracking.status, FormStatus::Good);
}

#[test]
fn test_metric_feedback_kept() {
    let record = form::normalize(
        &json!({ "metrics": { "depth": { "feedback": "break parallel" } } }),
        "squat",
    );
    assert_eq!(record.metrics.depth.feedback.as_deref(), Some("break parallel"));
    assert!(record.metrics.back_angle.feedback.is_none());
}

#[test]
fn test_guidance_lists_kept_when_non_empty() {
    let record = form::normalize(
        &json!({
            "improvements": ["keep knees out"],
            "tips": ["look forward", "brace harder"],
            "nextSteps": []
        }),
        "squat",
    );
    assert_eq!(record.improvements, vec!["keep knees out"]);
    assert_eq!(record.tips.len(), 2);
    // Empty arrays are not usable guidance: the canned default applies.
    assert_eq!(record.next_steps.len(), 1);
}

#[test]
fn test_status_serializes_snake_case() {
    let serialized = serde_json::to_value(FormStatus::NeedsImprovement).unwrap();
    assert_eq!(serialized, "needs_improvement");
}
