// ABOUTME: Integration tests for the coaching analysis service
// ABOUTME: Runs the full prompt -> provider -> recovery -> normalization flow with a mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use formcoach_core::errors::{AppError, AppResult, ErrorCode};
use formcoach_core::intelligence::{FormMetricsProvider, FrameMetrics};
use formcoach_core::llm::{
    ChatRequest, ChatResponse, ImageAttachment, LlmCapabilities, LlmProvider,
};
use formcoach_core::models::{FitnessGoal, UserProfile};
use formcoach_core::services::CoachService;

/// Scripted provider returning a fixed reply or a transport failure
struct MockProvider {
    reply: String,
    fail: bool,
    capabilities: LlmCapabilities,
}

impl MockProvider {
    fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            fail: false,
            capabilities: LlmCapabilities::full_featured(),
        }
    }

    fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            capabilities: LlmCapabilities::full_featured(),
        }
    }

    fn text_only(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            fail: false,
            capabilities: LlmCapabilities::text_only(),
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        if self.fail {
            return Err(AppError::external_service("mock", "connection reset"));
        }
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: "mock-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(!self.fail)
    }
}

/// Frame metrics stub reporting fixed measurements
struct FixedMetrics;

impl FormMetricsProvider for FixedMetrics {
    fn frame_metrics(&self, _frame: &[u8]) -> AppResult<FrameMetrics> {
        Ok(FrameMetrics {
            depth_score: Some(72.0),
            back_angle_deg: Some(40.0),
            knee_tracking_score: Some(88.0),
        })
    }
}

fn photo() -> ImageAttachment {
    ImageAttachment::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF])
}

#[tokio::test]
async fn test_workout_plan_from_malformed_response() {
    // Prose, fences, unquoted keys, single quotes, stray and trailing
    // commas: the whole gauntlet in one response.
    let service = CoachService::new(MockProvider::replying(
        "Here you go:\n```json\n{name: 'Plan A', schedule: [,],}\n```",
    ));

    let plan = service
        .generate_workout_plan(&UserProfile::default())
        .await
        .unwrap();

    assert_eq!(plan.name, "Plan A");
    assert_eq!(plan.schedule.len(), 0);
    // Defaults fill the rest of the record.
    assert_eq!(plan.duration, "4 weeks");
    assert_eq!(plan.goal, FitnessGoal::Maintain);
    assert!(!plan.progress_tracking.metrics.is_empty());
}

#[tokio::test]
async fn test_truncated_nutrition_response_recovers() {
    let service = CoachService::new(MockProvider::replying(
        "```json\n{\"dailyCalories\": 2400, \"mealPlan\": {\"breakfast\": [{\"name\": \"Oats\"",
    ));

    let plan = service
        .generate_nutrition_plan(&UserProfile::default())
        .await
        .unwrap();

    assert_eq!(plan.daily_calories, 2400.0);
    assert_eq!(plan.meal_plan.breakfast[0].name, "Oats");
    // Untouched slots fall back to canned lists.
    assert_eq!(plan.meal_plan.dinner.len(), 2);
}

#[tokio::test]
async fn test_physique_analysis_with_photo() {
    let service = CoachService::new(MockProvider::replying(
        r#"{"muscleMass": 84, "bodyFat": 14, "muscleGroups": {"chest": {"development": 8}}}"#,
    ));

    let record = service
        .analyze_physique(&UserProfile::default(), photo())
        .await
        .unwrap();

    assert_eq!(record.muscle_mass, 84.0);
    assert_eq!(record.strength_points, vec!["chest"]);
}

#[tokio::test]
async fn test_physique_analysis_works_without_vision() {
    let service = CoachService::new(MockProvider::text_only(r#"{"muscleMass": 70}"#));

    let record = service
        .analyze_physique(&UserProfile::default(), photo())
        .await
        .unwrap();

    assert_eq!(record.muscle_mass, 70.0);
}

#[tokio::test]
async fn test_form_analysis_with_injected_metrics() {
    let service = CoachService::new(MockProvider::replying(
        r#"{"overallScore": 77, "metrics": {"depth": {"score": 72, "status": "needs_improvement"}}}"#,
    ))
    .with_frame_metrics(Box::new(FixedMetrics));

    let record = service.analyze_form("squat", &[0xFF, 0xD8]).await.unwrap();

    assert_eq!(record.exercise, "squat");
    assert_eq!(record.overall_score, 77.0);
    assert_eq!(record.metrics.depth.score, 72.0);
}

#[tokio::test]
async fn test_no_payload_response_surfaces_error() {
    let service = CoachService::new(MockProvider::replying("I could not analyze this image."));

    let error = service
        .generate_workout_plan(&UserProfile::default())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::NoPayloadFound);
    assert!(error.context.request_id.is_some());
}

#[tokio::test]
async fn test_unparseable_response_surfaces_error() {
    let service = CoachService::new(MockProvider::replying("{\"a\": \"unterminated"));

    let error = service
        .generate_nutrition_plan(&UserProfile::default())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResponseUnparseable);
    assert_eq!(error.context.details["steps_applied"], 8);
}

#[tokio::test]
async fn test_transport_error_propagates_unchanged() {
    let service = CoachService::new(MockProvider::failing());

    let error = service
        .generate_workout_plan(&UserProfile::default())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("connection reset"));
}

#[tokio::test]
async fn test_concurrent_analyses_are_independent() {
    let service = CoachService::new(MockProvider::replying(
        r#"{"overallScore": 60, "metrics": {}}"#,
    ));

    let (a, b) = tokio::join!(
        service.analyze_form("squat", &[1]),
        service.analyze_form("deadlift", &[2]),
    );

    assert_eq!(a.unwrap().exercise, "squat");
    assert_eq!(b.unwrap().exercise, "deadlift");
}

#[tokio::test]
async fn test_health_check_passthrough() {
    let healthy = CoachService::new(MockProvider::replying("{}"));
    assert!(healthy.health_check().await.unwrap());
}
