// ABOUTME: Workout plan schema normalizer
// ABOUTME: Fills exercise defaults and goal-derived macro splits for training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Workout Plan
//!
//! Normalizes a recovered provider tree into a [`WorkoutPlan`]. Every
//! exercise is guaranteed usable set/rep/target defaults, the nutrition
//! guideline macros fall back to the per-goal lookup table, and progress
//! tracking gets canned metrics and checkpoints when the provider omitted
//! them. An empty schedule is a valid outcome (rest-day handling is the
//! caller's concern).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree;
use crate::constants::workout::{
    DEFAULT_DURATION, DEFAULT_PLAN_DESCRIPTION, DEFAULT_PLAN_NAME, DEFAULT_PROGRESS_CHECKPOINTS,
    DEFAULT_PROGRESS_METRICS, DEFAULT_REPS, DEFAULT_SETS, DEFAULT_TARGET_MUSCLES,
};
use crate::models::{FitnessGoal, MacroSplit};

/// A single exercise within a training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of working sets
    pub sets: u32,
    /// Rep prescription (e.g., "8-12")
    pub reps: String,
    /// Primary muscles targeted
    pub target_muscles: Vec<String>,
    /// Coaching notes, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of the training schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Day label (e.g., "Day 1" or "Monday")
    pub day: String,
    /// Session focus (e.g., "Push", "Lower body")
    pub focus: String,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
}

/// Nutrition guidance attached to a training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGuidelines {
    /// Macronutrient split as percentages of daily calories
    pub macros: MacroSplit,
}

/// Progress tracking guidance for the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressTracking {
    /// Metrics to monitor over the plan
    pub metrics: Vec<String>,
    /// Scheduled checkpoints
    pub checkpoints: Vec<String>,
}

/// Validated workout plan record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan name
    pub name: String,
    /// Plan description
    pub description: String,
    /// Plan duration (e.g., "4 weeks")
    pub duration: String,
    /// Goal the plan was generated for
    pub goal: FitnessGoal,
    /// Training schedule; may be empty when the provider returned none
    pub schedule: Vec<WorkoutDay>,
    /// Nutrition guidance
    pub nutrition: NutritionGuidelines,
    /// Progress tracking guidance
    pub progress_tracking: ProgressTracking,
    /// When the plan was produced
    pub generated_at: DateTime<Utc>,
}

/// Normalize a recovered tree into a workout plan
///
/// Never fails: missing or malformed fields take documented defaults.
#[must_use]
pub fn normalize(tree: &Value, goal: FitnessGoal) -> WorkoutPlan {
    WorkoutPlan {
        name: tree::text(tree, "name").unwrap_or_else(|| DEFAULT_PLAN_NAME.to_owned()),
        description: tree::text(tree, "description")
            .unwrap_or_else(|| DEFAULT_PLAN_DESCRIPTION.to_owned()),
        duration: tree::text(tree, "duration").unwrap_or_else(|| DEFAULT_DURATION.to_owned()),
        goal,
        schedule: normalize_schedule(tree.get("schedule")),
        nutrition: NutritionGuidelines {
            macros: normalize_macros(tree.get("nutrition"), goal),
        },
        progress_tracking: normalize_progress(tree::child(tree, "progressTracking")),
        generated_at: Utc::now(),
    }
}

/// Normalize the day sequence; non-object entries are dropped
fn normalize_schedule(schedule: Option<&Value>) -> Vec<WorkoutDay> {
    let Some(Value::Array(days)) = schedule else {
        return Vec::new();
    };

    days.iter()
        .filter(|day| day.is_object())
        .enumerate()
        .map(|(index, day)| WorkoutDay {
            day: tree::text(day, "day").unwrap_or_else(|| format!("Day {}", index + 1)),
            focus: tree::text(day, "focus").unwrap_or_else(|| "General".to_owned()),
            exercises: normalize_exercises(day.get("exercises")),
        })
        .collect()
}

/// Normalize the exercise list for one day
fn normalize_exercises(exercises: Option<&Value>) -> Vec<Exercise> {
    let Some(Value::Array(entries)) = exercises else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(normalize_exercise)
        .collect()
}

fn normalize_exercise(entry: &Value) -> Exercise {
    // Sets below one are treated as malformed, same as non-numeric input.
    let sets = tree::num(entry, "sets")
        .filter(|v| *v >= 1.0)
        .map_or(DEFAULT_SETS, |v| v.round() as u32);

    let reps = tree::text(entry, "reps")
        .or_else(|| tree::num(entry, "reps").map(|n| format!("{n:.0}")))
        .unwrap_or_else(|| DEFAULT_REPS.to_owned());

    Exercise {
        name: tree::text(entry, "name").unwrap_or_else(|| "Exercise".to_owned()),
        sets,
        reps,
        target_muscles: tree::string_list_or(entry, "targetMuscles", DEFAULT_TARGET_MUSCLES),
        notes: tree::text(entry, "notes"),
    }
}

/// Resolve the macro split from `nutrition.macros`, falling back to the
/// per-goal lookup table when any component is missing or malformed
fn normalize_macros(nutrition: Option<&Value>, goal: FitnessGoal) -> MacroSplit {
    let provided = nutrition
        .and_then(|n| n.get("macros"))
        .and_then(|macros| {
            let protein = tree::num(macros, "protein")?;
            let carbs = tree::num(macros, "carbs")?;
            let fats = tree::num(macros, "fats")?;
            Some(MacroSplit {
                protein: to_percent(protein)?,
                carbs: to_percent(carbs)?,
                fats: to_percent(fats)?,
            })
        });

    provided.unwrap_or_else(|| goal.macro_split())
}

fn to_percent(value: f64) -> Option<u8> {
    (0.0..=100.0).contains(&value).then(|| value.round() as u8)
}

fn normalize_progress(progress: &Value) -> ProgressTracking {
    ProgressTracking {
        metrics: tree::string_list_or(progress, "metrics", DEFAULT_PROGRESS_METRICS),
        checkpoints: tree::string_list_or(progress, "checkpoints", DEFAULT_PROGRESS_CHECKPOINTS),
    }
}
