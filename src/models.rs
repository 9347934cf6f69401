// ABOUTME: Core domain models for the coaching core
// ABOUTME: User profile, biological sex, activity level, and training goal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! Core domain models
//!
//! The [`UserProfile`] carries the biometric and lifestyle inputs every
//! coaching request is built from. Goal and activity enums carry the
//! lookup tables (activity multipliers, calorie adjustments, macro
//! splits) the nutrition and workout normalizers fall back to.

use serde::{Deserialize, Serialize};

/// Biological sex for energy-expenditure calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher basal metabolic rate)
    Male,
    /// Female (lower basal metabolic rate)
    Female,
}

impl Sex {
    /// String representation for prompts and serialized records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Activity level for daily energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
    /// Hard training twice a day
    ExtraActive,
}

impl ActivityLevel {
    /// Total daily energy expenditure multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// String representation for prompts and serialized records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly_active" | "light" => Some(Self::LightlyActive),
            "moderately_active" | "moderate" => Some(Self::ModeratelyActive),
            "very_active" | "active" => Some(Self::VeryActive),
            "extra_active" | "athlete" => Some(Self::ExtraActive),
            _ => None,
        }
    }
}

/// Training goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit for fat loss
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus for hypertrophy
    BuildMuscle,
    /// Strength-focused programming
    Strength,
    /// Endurance-focused programming
    Endurance,
}

impl FitnessGoal {
    /// Calorie adjustment multiplier applied to estimated expenditure
    #[must_use]
    pub const fn calorie_adjustment(&self) -> f64 {
        match self {
            Self::LoseWeight => 0.8,
            Self::BuildMuscle => 1.1,
            Self::Maintain | Self::Strength | Self::Endurance => 1.0,
        }
    }

    /// Default macronutrient split (percent of daily calories) for this goal
    #[must_use]
    pub const fn macro_split(&self) -> MacroSplit {
        match self {
            Self::BuildMuscle => MacroSplit {
                protein: 30,
                carbs: 45,
                fats: 25,
            },
            Self::LoseWeight => MacroSplit {
                protein: 40,
                carbs: 30,
                fats: 30,
            },
            Self::Strength | Self::Maintain => MacroSplit {
                protein: 30,
                carbs: 40,
                fats: 30,
            },
            Self::Endurance => MacroSplit {
                protein: 25,
                carbs: 55,
                fats: 20,
            },
        }
    }

    /// String representation for prompts and serialized records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::Maintain => "maintain",
            Self::BuildMuscle => "build_muscle",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lose_weight" | "weight_loss" | "cut" => Some(Self::LoseWeight),
            "maintain" | "maintenance" => Some(Self::Maintain),
            "build_muscle" | "muscle_gain" | "bulk" => Some(Self::BuildMuscle),
            "strength" => Some(Self::Strength),
            "endurance" => Some(Self::Endurance),
            _ => None,
        }
    }
}

/// Macronutrient split as percentages of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage
    pub protein: u8,
    /// Carbohydrate percentage
    pub carbs: u8,
    /// Fat percentage
    pub fats: u8,
}

/// Biometric and lifestyle inputs for coaching requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex for energy calculations
    pub sex: Sex,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
    /// Selected training goal
    pub goal: FitnessGoal,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight_kg: 75.0,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: FitnessGoal::Maintain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_macro_splits_sum_to_100() {
        for goal in [
            FitnessGoal::LoseWeight,
            FitnessGoal::Maintain,
            FitnessGoal::BuildMuscle,
            FitnessGoal::Strength,
            FitnessGoal::Endurance,
        ] {
            let split = goal.macro_split();
            assert_eq!(
                u32::from(split.protein) + u32::from(split.carbs) + u32::from(split.fats),
                100,
                "split for {goal:?} must cover all calories"
            );
        }
    }

    #[test]
    fn test_goal_round_trip() {
        for goal in [
            FitnessGoal::LoseWeight,
            FitnessGoal::Maintain,
            FitnessGoal::BuildMuscle,
            FitnessGoal::Strength,
            FitnessGoal::Endurance,
        ] {
            assert_eq!(FitnessGoal::parse(goal.as_str()), Some(goal));
        }
    }

    #[test]
    fn test_activity_multipliers_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }
}
