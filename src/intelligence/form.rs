// ABOUTME: Exercise form analysis schema normalizer and frame-metrics capability
// ABOUTME: Clamps form scores, coerces status values, and stubs the pose-estimation boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Form Analysis
//!
//! Normalizes a recovered provider tree into a [`FormAnalysis`]. Scores
//! clamp to 0-100, status values coerce into the closed
//! good/needs-improvement/poor set, and guidance lists get canned
//! single-item defaults when the provider omitted them.
//!
//! Pose estimation is an injected capability ([`FormMetricsProvider`]): a
//! real computer-vision backend can be substituted without touching the
//! recovery pipeline. The bundled [`UnavailableFrameMetrics`] reports no
//! measurements rather than inventing them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree;
use crate::constants::form::{
    DEFAULT_IMPROVEMENT, DEFAULT_NEXT_STEP, DEFAULT_SCORE, DEFAULT_TIP, SCORE_RANGE,
};
use crate::errors::AppResult;

// ============================================================================
// Frame Metrics Capability
// ============================================================================

/// Measurements extracted from a single video frame by a pose-estimation
/// backend
///
/// All fields are optional: a backend reports only what it could measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Squat/hinge depth quality (0-100)
    pub depth_score: Option<f64>,
    /// Back angle relative to the floor, in degrees
    pub back_angle_deg: Option<f64>,
    /// Knee tracking quality (0-100)
    pub knee_tracking_score: Option<f64>,
}

/// Injected pose-estimation capability
///
/// Implementations analyze a single encoded frame and return whatever
/// measurements they can produce.
pub trait FormMetricsProvider: Send + Sync {
    /// Extract metrics from an encoded image frame
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails; callers degrade to an
    /// unmeasured analysis rather than aborting.
    fn frame_metrics(&self, frame: &[u8]) -> AppResult<FrameMetrics>;
}

/// Default capability used when no pose-estimation backend is wired in
///
/// Reports no measurements; it never fabricates values.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableFrameMetrics;

impl FormMetricsProvider for UnavailableFrameMetrics {
    fn frame_metrics(&self, _frame: &[u8]) -> AppResult<FrameMetrics> {
        Ok(FrameMetrics::default())
    }
}

// ============================================================================
// Record Types
// ============================================================================

/// Status of a single form metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// Movement pattern is sound
    Good,
    /// Movement pattern needs attention
    NeedsImprovement,
    /// Movement pattern risks injury
    Poor,
}

impl FormStatus {
    /// Coerce a provider-supplied status string into the closed set
    ///
    /// Unknown values coerce to [`FormStatus::Good`].
    #[must_use]
    pub fn coerce(s: Option<&str>) -> Self {
        match s.map(str::trim) {
            Some("needs_improvement") => Self::NeedsImprovement,
            Some("poor") => Self::Poor,
            _ => Self::Good,
        }
    }
}

/// A single graded aspect of the movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormMetric {
    /// Quality score (0-100)
    pub score: f64,
    /// Status classification
    pub status: FormStatus,
    /// Metric-specific feedback, when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// The graded aspects of the movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetricSet {
    /// Depth of the movement
    pub depth: FormMetric,
    /// Back angle through the movement
    pub back_angle: FormMetric,
    /// Knee tracking over the toes
    pub knee_tracking: FormMetric,
}

/// Validated form analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalysis {
    /// Exercise that was analyzed
    pub exercise: String,
    /// Overall movement quality (0-100)
    pub overall_score: f64,
    /// Per-aspect grading
    pub metrics: FormMetricSet,
    /// Prioritized improvements
    pub improvements: Vec<String>,
    /// Coaching tips
    pub tips: Vec<String>,
    /// Suggested next steps
    pub next_steps: Vec<String>,
    /// When the analysis was produced
    pub generated_at: DateTime<Utc>,
}

/// Normalize a recovered tree into a form analysis
///
/// Never fails: missing or malformed fields take documented defaults.
#[must_use]
pub fn normalize(tree: &Value, exercise: &str) -> FormAnalysis {
    let metrics_tree = tree::child(tree, "metrics");

    FormAnalysis {
        exercise: exercise.to_owned(),
        overall_score: tree::clamp_or(tree::num(tree, "overallScore"), SCORE_RANGE, DEFAULT_SCORE),
        metrics: FormMetricSet {
            depth: normalize_metric(tree::child(metrics_tree, "depth")),
            back_angle: normalize_metric(tree::child(metrics_tree, "backAngle")),
            knee_tracking: normalize_metric(tree::child(metrics_tree, "kneeTracking")),
        },
        improvements: tree::string_list_or(tree, "improvements", &[DEFAULT_IMPROVEMENT]),
        tips: tree::string_list_or(tree, "tips", &[DEFAULT_TIP]),
        next_steps: tree::string_list_or(tree, "nextSteps", &[DEFAULT_NEXT_STEP]),
        generated_at: Utc::now(),
    }
}

fn normalize_metric(metric: &Value) -> FormMetric {
    FormMetric {
        score: tree::clamp_or(tree::num(metric, "score"), SCORE_RANGE, DEFAULT_SCORE),
        status: FormStatus::coerce(metric.get("status").and_then(Value::as_str)),
        feedback: tree::text(metric, "feedback"),
    }
}
