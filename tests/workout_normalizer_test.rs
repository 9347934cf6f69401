// ABOUTME: Unit tests for the workout plan normalizer
// ABOUTME: Tests exercise defaults, goal macro tables, and canned progress lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use formcoach_core::intelligence::workout;
use formcoach_core::models::FitnessGoal;
use serde_json::json;

#[test]
fn test_empty_object_yields_fully_populated_record() {
    let plan = workout::normalize(&json!({}), FitnessGoal::Maintain);

    assert_eq!(plan.name, "Custom Training Plan");
    assert!(!plan.description.is_empty());
    assert_eq!(plan.duration, "4 weeks");
    assert!(plan.schedule.is_empty());
    assert!(!plan.progress_tracking.metrics.is_empty());
    assert!(!plan.progress_tracking.checkpoints.is_empty());
}

#[test]
fn test_empty_schedule_is_preserved() {
    // An empty schedule is valid output (downstream shows a rest day).
    let plan = workout::normalize(
        &json!({ "name": "Plan A", "schedule": [] }),
        FitnessGoal::BuildMuscle,
    );
    assert_eq!(plan.name, "Plan A");
    assert_eq!(plan.schedule.len(), 0);
}

#[test]
fn test_exercise_defaults() {
    let plan = workout::normalize(
        &json!({
            "schedule": [
                { "day": "Monday", "exercises": [{ "name": "Bench Press" }] }
            ]
        }),
        FitnessGoal::Strength,
    );

    let exercise = &plan.schedule[0].exercises[0];
    assert_eq!(exercise.name, "Bench Press");
    assert_eq!(exercise.sets, 3);
    assert_eq!(exercise.reps, "8-12");
    assert_eq!(exercise.target_muscles, vec!["Full Body"]);
    assert!(exercise.notes.is_none());
}

#[test]
fn test_exercise_provided_values_kept() {
    let plan = workout::normalize(
        &json!({
            "schedule": [{
                "exercises": [{
                    "name": "Squat",
                    "sets": 5,
                    "reps": "5",
                    "targetMuscles": ["quads", "glutes"],
                    "notes": "pause at the bottom"
                }]
            }]
        }),
        FitnessGoal::Strength,
    );

    let exercise = &plan.schedule[0].exercises[0];
    assert_eq!(exercise.sets, 5);
    assert_eq!(exercise.reps, "5");
    assert_eq!(exercise.target_muscles, vec!["quads", "glutes"]);
    assert_eq!(exercise.notes.as_deref(), Some("pause at the bottom"));
}

#[test]
fn test_numeric_reps_coerced_to_string() {
    let plan = workout::normalize(
        &json!({ "schedule": [{ "exercises": [{ "name": "Row", "reps": 10 }] }] }),
        FitnessGoal::Maintain,
    );
    assert_eq!(plan.schedule[0].exercises[0].reps, "10");
}

#[test]
fn test_day_labels_default_by_position() {
    let plan = workout::normalize(
        &json!({ "schedule": [{}, {}] }),
        FitnessGoal::Endurance,
    );
    assert_eq!(plan.schedule[0].day, "Day 1");
    assert_eq!(plan.schedule[1].day, "Day 2");
    assert_eq!(plan.schedule[0].focus, "General");
}

#[test]
fn test_macro_split_defaults_per_goal() {
    let cases = [
        (FitnessGoal::BuildMuscle, (30, 45, 25)),
        (FitnessGoal::LoseWeight, (40, 30, 30)),
        (FitnessGoal::Strength, (30, 40, 30)),
        (FitnessGoal::Endurance, (25, 55, 20)),
    ];

    for (goal, (protein, carbs, fats)) in cases {
        let plan = workout::normalize(&json!({}), goal);
        assert_eq!(plan.nutrition.macros.protein, protein, "{goal:?}");
        assert_eq!(plan.nutrition.macros.carbs, carbs, "{goal:?}");
        assert_eq!(plan.nutrition.macros.fats, fats, "{goal:?}");
    }
}

#[test]
fn test_provided_macros_kept_when_complete() {
    let plan = workout::normalize(
        &json!({ "nutrition": { "macros": { "protein": 35, "carbs": 40, "fats": 25 } } }),
        FitnessGoal::BuildMuscle,
    );
    assert_eq!(plan.nutrition.macros.protein, 35);
    assert_eq!(plan.nutrition.macros.carbs, 40);
    assert_eq!(plan.nutrition.macros.fats, 25);
}

#[test]
fn test_partial_macros_fall_back_to_goal_table() {
    let plan = workout::normalize(
        &json!({ "nutrition": { "macros": { "protein": 35 } } }),
        FitnessGoal::Endurance,
    );
    assert_eq!(plan.nutrition.macros.protein, 25);
    assert_eq!(plan.nutrition.macros.carbs, 55);
}

#[test]
fn test_progress_tracking_canned_defaults() {
    let plan = workout::normalize(&json!({ "progressTracking": {} }), FitnessGoal::Maintain);
    assert!(plan
        .progress_tracking
        .metrics
        .iter()
        .any(|m| m.contains("Body weight")));
    assert!(!plan.progress_tracking.checkpoints.is_empty());
}

#[test]
fn test_provided_progress_tracking_kept() {
    let plan = workout::normalize(
        &json!({ "progressTracking": { "metrics": ["Vertical jump"], "checkpoints": ["Week 3"] } }),
        FitnessGoal::Maintain,
    );
    assert_eq!(plan.progress_tracking.metrics, vec!["Vertical jump"]);
    assert_eq!(plan.progress_tracking.checkpoints, vec!["Week 3"]);
}

#[test]
fn test_non_object_schedule_entries_dropped() {
    let plan = workout::normalize(
        &json!({ "schedule": [null, "rest", { "day": "Friday" }] }),
        FitnessGoal::Maintain,
    );
    assert_eq!(plan.schedule.len(), 1);
    assert_eq!(plan.schedule[0].day, "Friday");
}
