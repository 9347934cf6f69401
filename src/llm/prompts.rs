// ABOUTME: Prompt construction for the four coaching domains
// ABOUTME: Builds system and user messages requesting strict JSON payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Coaching Prompts
//!
//! Prompt builders for the four coaching domains. Each user prompt spells
//! out the exact JSON shape the downstream normalizer expects. Providers
//! routinely ignore parts of these instructions, which is why the
//! recovery pipeline exists; the prompts maximize the odds of a clean
//! response, nothing more.

use crate::intelligence::form::FrameMetrics;
use crate::models::UserProfile;

/// System prompt shared by all coaching requests
pub const COACH_SYSTEM_PROMPT: &str = "You are FormCoach, a certified strength and conditioning \
coach and sports nutritionist. Respond with a single JSON object only: no prose, no markdown \
fences, no commentary before or after the JSON.";

/// Render the shared profile block used by every domain prompt
fn profile_block(profile: &UserProfile) -> String {
    format!(
        "Athlete profile:\n\
         - weight: {} kg\n\
         - height: {} cm\n\
         - age: {}\n\
         - sex: {}\n\
         - activity level: {}\n\
         - goal: {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex.as_str(),
        profile.activity_level.as_str(),
        profile.goal.as_str(),
    )
}

/// Build the user prompt for a physique assessment
#[must_use]
pub fn physique_analysis_prompt(profile: &UserProfile) -> String {
    format!(
        "{}\n\nAssess the attached physique photo. Return JSON with this shape:\n\
         {{\"muscleMass\": number (60-95), \"bodyFat\": number (5-35), \"symmetry\": number (1-10), \
         \"posture\": number (1-10), \"overallConvexity\": number (1-10), \
         \"muscleGroups\": {{\"<group>\": {{\"development\": number (1-10), \"convexity\": number (1-10), \
         \"symmetry\": number (1-10), \"notes\": string}}}}, \
         \"weakPoints\": [string], \"strengthPoints\": [string], \
         \"insights\": [string], \"recommendations\": [string]}}",
        profile_block(profile)
    )
}

/// Build the user prompt for a workout plan
#[must_use]
pub fn workout_plan_prompt(profile: &UserProfile) -> String {
    format!(
        "{}\n\nCreate a weekly training plan for this athlete. Return JSON with this shape:\n\
         {{\"name\": string, \"description\": string, \"duration\": string, \
         \"schedule\": [{{\"day\": string, \"focus\": string, \
         \"exercises\": [{{\"name\": string, \"sets\": number, \"reps\": string, \
         \"targetMuscles\": [string], \"notes\": string}}]}}], \
         \"nutrition\": {{\"macros\": {{\"protein\": number, \"carbs\": number, \"fats\": number}}}}, \
         \"progressTracking\": {{\"metrics\": [string], \"checkpoints\": [string]}}}}",
        profile_block(profile)
    )
}

/// Build the user prompt for a nutrition plan
#[must_use]
pub fn nutrition_plan_prompt(profile: &UserProfile) -> String {
    format!(
        "{}\n\nCreate a daily nutrition plan for this athlete. Return JSON with this shape:\n\
         {{\"dailyCalories\": number, \
         \"macros\": {{\"protein\": {{\"grams\": number, \"percentage\": number}}, \
         \"carbs\": {{\"grams\": number, \"percentage\": number}}, \
         \"fats\": {{\"grams\": number, \"percentage\": number}}}}, \
         \"mealPlan\": {{\"breakfast\": [{{\"name\": string, \"calories\": number}}], \
         \"lunch\": [...], \"dinner\": [...], \"snacks\": [...]}}}}\n\
         Keep each meal slot to at most two entries.",
        profile_block(profile)
    )
}

/// Build the user prompt for an exercise form analysis
///
/// Measured frame metrics, when a pose-estimation backend supplied them,
/// are embedded so the model grades the actual movement instead of
/// guessing from the still image alone.
#[must_use]
pub fn form_analysis_prompt(exercise: &str, measured: &FrameMetrics) -> String {
    let mut prompt = format!(
        "Analyze the athlete's {exercise} form in the attached frame. Return JSON with this shape:\n\
         {{\"overallScore\": number (0-100), \
         \"metrics\": {{\"depth\": {{\"score\": number (0-100), \"status\": \"good\"|\"needs_improvement\"|\"poor\", \"feedback\": string}}, \
         \"backAngle\": {{...}}, \"kneeTracking\": {{...}}}}, \
         \"improvements\": [string], \"tips\": [string], \"nextSteps\": [string]}}"
    );

    let mut measurements = Vec::new();
    if let Some(depth) = measured.depth_score {
        measurements.push(format!("measured depth score: {depth:.0}/100"));
    }
    if let Some(angle) = measured.back_angle_deg {
        measurements.push(format!("measured back angle: {angle:.0} degrees"));
    }
    if let Some(tracking) = measured.knee_tracking_score {
        measurements.push(format!("measured knee tracking score: {tracking:.0}/100"));
    }
    if !measurements.is_empty() {
        prompt.push_str("\nPose estimation measurements:\n");
        prompt.push_str(&measurements.join("\n"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_mention_expected_keys() {
        let profile = UserProfile::default();
        assert!(physique_analysis_prompt(&profile).contains("muscleGroups"));
        assert!(workout_plan_prompt(&profile).contains("progressTracking"));
        assert!(nutrition_plan_prompt(&profile).contains("mealPlan"));
    }

    #[test]
    fn test_form_prompt_embeds_measurements() {
        let measured = FrameMetrics {
            depth_score: Some(82.0),
            back_angle_deg: Some(45.0),
            knee_tracking_score: None,
        };
        let prompt = form_analysis_prompt("squat", &measured);
        assert!(prompt.contains("measured depth score: 82/100"));
        assert!(prompt.contains("45 degrees"));
        assert!(!prompt.contains("knee tracking score:"));
    }

    #[test]
    fn test_form_prompt_omits_measurement_block_when_empty() {
        let prompt = form_analysis_prompt("deadlift", &FrameMetrics::default());
        assert!(!prompt.contains("Pose estimation measurements"));
    }
}
