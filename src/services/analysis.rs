// ABOUTME: Coaching analysis service orchestrating the four coaching domains
// ABOUTME: Runs prompt -> provider -> recovery -> normalization per analysis call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Coach Service
//!
//! [`CoachService`] is the entry point for the four coaching operations:
//! physique assessment, workout plan generation, nutrition plan
//! generation, and exercise form analysis.
//!
//! Every operation is an independent, self-contained computation: the
//! pipeline holds no shared mutable state, so independent analyses (e.g.,
//! four pose photos) can run as concurrent tasks. Provider transport
//! errors propagate unchanged; the core performs no retries.

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::intelligence::{form, nutrition, physique, workout};
use crate::intelligence::{
    FormAnalysis, FormMetricsProvider, FrameMetrics, NutritionPlan, PhysiqueAnalysis,
    UnavailableFrameMetrics, WorkoutPlan,
};
use crate::llm::{prompts, ChatMessage, ChatRequest, ImageAttachment, LlmProvider};
use crate::models::UserProfile;
use crate::recovery;

/// Sampling temperature for structured coaching output
const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// MIME type of video frames captured by the app
const FRAME_MIME: &str = "image/jpeg";

/// Coaching analysis service over a generative text provider
pub struct CoachService<P> {
    provider: P,
    frame_metrics: Box<dyn FormMetricsProvider>,
}

impl<P: LlmProvider> CoachService<P> {
    /// Create a service with no pose-estimation backend
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            frame_metrics: Box::new(UnavailableFrameMetrics),
        }
    }

    /// Wire in a pose-estimation backend for form analysis
    #[must_use]
    pub fn with_frame_metrics(mut self, frame_metrics: Box<dyn FormMetricsProvider>) -> Self {
        self.frame_metrics = frame_metrics;
        self
    }

    /// Check provider health
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Assess a physique photo against the athlete's profile
    ///
    /// # Errors
    ///
    /// Returns provider transport errors unchanged, or a recovery error
    /// when the response yields no parseable payload.
    pub async fn analyze_physique(
        &self,
        profile: &UserProfile,
        photo: ImageAttachment,
    ) -> AppResult<PhysiqueAnalysis> {
        let request_id = Uuid::new_v4();
        info!(%request_id, domain = "physique", "starting analysis");

        let user = self.attach_if_supported(
            ChatMessage::user(prompts::physique_analysis_prompt(profile)),
            photo,
        );
        let tree = self.request_tree(request_id, "physique", user).await?;

        let record = physique::normalize(&tree);
        info!(
            %request_id,
            domain = "physique",
            muscle_groups = record.muscle_groups.len(),
            weak_points = record.weak_points.len(),
            "analysis complete"
        );
        Ok(record)
    }

    /// Generate a workout plan for the athlete's profile
    ///
    /// # Errors
    ///
    /// Returns provider transport errors unchanged, or a recovery error
    /// when the response yields no parseable payload.
    pub async fn generate_workout_plan(
        &self,
        profile: &UserProfile,
    ) -> AppResult<WorkoutPlan> {
        let request_id = Uuid::new_v4();
        info!(%request_id, domain = "workout", goal = profile.goal.as_str(), "starting plan generation");

        let user = ChatMessage::user(prompts::workout_plan_prompt(profile));
        let tree = self.request_tree(request_id, "workout", user).await?;

        let record = workout::normalize(&tree, profile.goal);
        info!(
            %request_id,
            domain = "workout",
            scheduled_days = record.schedule.len(),
            "plan generated"
        );
        Ok(record)
    }

    /// Generate a nutrition plan for the athlete's profile
    ///
    /// # Errors
    ///
    /// Returns provider transport errors unchanged, or a recovery error
    /// when the response yields no parseable payload.
    pub async fn generate_nutrition_plan(
        &self,
        profile: &UserProfile,
    ) -> AppResult<NutritionPlan> {
        let request_id = Uuid::new_v4();
        info!(%request_id, domain = "nutrition", goal = profile.goal.as_str(), "starting plan generation");

        let user = ChatMessage::user(prompts::nutrition_plan_prompt(profile));
        let tree = self.request_tree(request_id, "nutrition", user).await?;

        let record = nutrition::normalize(&tree, profile);
        info!(
            %request_id,
            domain = "nutrition",
            daily_calories = record.daily_calories,
            "plan generated"
        );
        Ok(record)
    }

    /// Analyze exercise form from a single JPEG-encoded video frame
    ///
    /// Pose-estimation measurements, when the injected backend produces
    /// them, are embedded in the prompt; a backend failure degrades to an
    /// unmeasured analysis instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns provider transport errors unchanged, or a recovery error
    /// when the response yields no parseable payload.
    pub async fn analyze_form(&self, exercise: &str, frame: &[u8]) -> AppResult<FormAnalysis> {
        let request_id = Uuid::new_v4();
        info!(%request_id, domain = "form", exercise, "starting analysis");

        let measured = self.frame_metrics.frame_metrics(frame).unwrap_or_else(|e| {
            warn!(%request_id, error = %e, "frame metrics unavailable, continuing unmeasured");
            FrameMetrics::default()
        });

        let user = self.attach_if_supported(
            ChatMessage::user(prompts::form_analysis_prompt(exercise, &measured)),
            ImageAttachment::from_bytes(FRAME_MIME, frame),
        );
        let tree = self.request_tree(request_id, "form", user).await?;

        let record = form::normalize(&tree, exercise);
        info!(
            %request_id,
            domain = "form",
            overall_score = record.overall_score,
            "analysis complete"
        );
        Ok(record)
    }

    /// Attach an image when the provider supports vision; otherwise send
    /// the prompt text-only
    fn attach_if_supported(&self, message: ChatMessage, image: ImageAttachment) -> ChatMessage {
        if self.provider.capabilities().supports_vision() {
            message.with_image(image)
        } else {
            warn!(
                provider = self.provider.name(),
                "provider does not support vision, sending text-only prompt"
            );
            message
        }
    }

    /// Call the provider and recover a generic tree from the raw response
    async fn request_tree(
        &self,
        request_id: Uuid,
        domain: &'static str,
        user: ChatMessage,
    ) -> AppResult<Value> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::COACH_SYSTEM_PROMPT),
            user,
        ])
        .with_temperature(ANALYSIS_TEMPERATURE);

        let response = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| e.with_request_id(request_id.to_string()))?;

        debug!(
            %request_id,
            domain,
            response_chars = response.content.len(),
            finish_reason = ?response.finish_reason,
            "provider responded"
        );

        recovery::recover(&response.content).map_err(|e| {
            warn!(%request_id, domain, error = %e, "failed to recover structured payload");
            AppError::from(e).with_request_id(request_id.to_string())
        })
    }
}
