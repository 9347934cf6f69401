// ABOUTME: Resilient structured-data recovery pipeline for provider responses
// ABOUTME: Locates a JSON payload in noisy text and repairs it into a parsed tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Structured-Data Recovery
//!
//! Generative text providers return text that approximates JSON but is
//! routinely truncated, wrapped in prose or code fences, or sprinkled
//! with syntax a strict parser rejects. This module recovers a usable
//! [`serde_json::Value`] tree from that text in two stages:
//!
//! 1. [`locate`] finds the most plausible object/array boundaries inside
//!    the raw text.
//! 2. [`repair_and_parse`] applies a fixed, ordered ladder of pure
//!    textual fixes, re-attempting a strict parse after each one.
//!
//! The ladder is intentionally a fixed escalation rather than a
//! fault-tolerant grammar: provider failure modes are few and recurring,
//! and a linear bounded process stays deterministic and testable.
//!
//! Failures are terminal for the single analysis call and carry only a
//! bounded preview of the offending text, never the full response.

pub mod locator;
pub mod repair;

pub use locator::{locate, LocatedSpan, PayloadKind};
pub use repair::{repair_and_parse, RepairOutcome};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::constants::recovery::DIAGNOSTIC_PREVIEW_CHARS;
use crate::errors::{AppError, ErrorCode};

/// Terminal failure of the recovery pipeline
///
/// Both variants carry a bounded preview of the text that defeated the
/// pipeline, for diagnostics.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// The raw text contains no recognizable object/array opening bracket
    #[error("no JSON payload found in provider response (preview: {preview:?})")]
    NoPayloadFound {
        /// Bounded prefix of the raw text
        preview: String,
    },

    /// Every repair step was applied and the result still fails to parse
    #[error("response unparseable after {steps_applied} repair steps (preview: {preview:?})")]
    Unparseable {
        /// Number of repair steps that were applied before giving up
        steps_applied: usize,
        /// Bounded prefix of the last repair attempt
        preview: String,
    },
}

impl From<RecoveryError> for AppError {
    fn from(error: RecoveryError) -> Self {
        match &error {
            RecoveryError::NoPayloadFound { preview } => {
                Self::new(ErrorCode::NoPayloadFound, "provider response contains no payload")
                    .with_details(serde_json::json!({ "preview": preview }))
            }
            RecoveryError::Unparseable {
                steps_applied,
                preview,
            } => Self::new(
                ErrorCode::ResponseUnparseable,
                format!("provider response unparseable after {steps_applied} repair steps"),
            )
            .with_details(serde_json::json!({
                "steps_applied": steps_applied,
                "preview": preview,
            })),
        }
    }
}

/// Truncate text to the bounded diagnostic preview length
pub(crate) fn preview(text: &str) -> String {
    text.chars().take(DIAGNOSTIC_PREVIEW_CHARS).collect()
}

/// Run the full recovery pipeline on a raw provider response
///
/// Locates the payload, repairs it, and returns the parsed tree.
///
/// # Errors
///
/// Returns [`RecoveryError::NoPayloadFound`] if no payload boundaries
/// exist in the text, or [`RecoveryError::Unparseable`] if the repair
/// ladder is exhausted without a successful parse.
pub fn recover(raw: &str) -> Result<Value, RecoveryError> {
    let span = locate(raw)?;
    let outcome = repair_and_parse(span.slice(raw))?;

    debug!(
        kind = ?span.kind,
        span_len = span.end - span.start,
        steps = outcome.steps_applied,
        "recovered structured payload from provider response"
    );

    Ok(outcome.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_bounded() {
        let long = "x".repeat(10_000);
        assert_eq!(preview(&long).chars().count(), DIAGNOSTIC_PREVIEW_CHARS);
    }

    #[test]
    fn test_recovery_error_converts_to_app_error() {
        let error = RecoveryError::Unparseable {
            steps_applied: 8,
            preview: "{broken".to_owned(),
        };
        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::ResponseUnparseable);
        assert_eq!(app_error.context.details["steps_applied"], 8);
    }
}
