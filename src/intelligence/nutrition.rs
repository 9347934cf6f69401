// ABOUTME: Nutrition plan schema normalizer with energy-expenditure defaults
// ABOUTME: Mifflin-St Jeor calorie estimation, macro derivation, and meal slot clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Nutrition Plan
//!
//! Normalizes a recovered provider tree into a [`NutritionPlan`]. Daily
//! calories default to a Mifflin-St Jeor estimate adjusted for activity
//! level and goal, macro targets derive from the goal's percentage split,
//! and each meal slot is clamped to two entries (longer provider lists
//! are disproportionately likely to be truncated mid-generation).
//!
//! # Reference
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//! 241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree;
use crate::constants::nutrition::{
    CARBS_KCAL_PER_G, DEFAULT_BREAKFAST, DEFAULT_DINNER, DEFAULT_LUNCH, DEFAULT_SNACKS,
    FAT_KCAL_PER_G, MAX_MEALS_PER_SLOT, MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF,
    MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF, PROTEIN_KCAL_PER_G,
};
use crate::models::{FitnessGoal, Sex, UserProfile};

/// A macro target expressed both ways the app displays it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAmount {
    /// Grams per day
    pub grams: f64,
    /// Percentage of daily calories
    pub percentage: f64,
}

/// Daily macronutrient targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein target
    pub protein: MacroAmount,
    /// Carbohydrate target
    pub carbs: MacroAmount,
    /// Fat target
    pub fats: MacroAmount,
}

/// A single meal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name or description
    pub name: String,
    /// Approximate calories, when the provider supplied them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

/// Meals for one day, by slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Breakfast options (at most two)
    pub breakfast: Vec<Meal>,
    /// Lunch options (at most two)
    pub lunch: Vec<Meal>,
    /// Dinner options (at most two)
    pub dinner: Vec<Meal>,
    /// Snack options (at most two)
    pub snacks: Vec<Meal>,
}

/// Validated nutrition plan record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Daily calorie target
    pub daily_calories: f64,
    /// Macronutrient targets
    pub macros: MacroTargets,
    /// Daily meal plan
    pub meal_plan: MealPlan,
    /// Goal the plan was generated for
    pub goal: FitnessGoal,
    /// When the plan was produced
    pub generated_at: DateTime<Utc>,
}

/// Estimate daily calories from the athlete's profile
///
/// Mifflin-St Jeor BMR, multiplied by the activity factor, then adjusted
/// for the training goal (deficit for weight loss, surplus for muscle
/// gain).
#[must_use]
pub fn estimate_daily_calories(profile: &UserProfile) -> f64 {
    let sex_constant = match profile.sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };

    let bmr = MSJ_WEIGHT_COEF * profile.weight_kg + MSJ_HEIGHT_COEF * profile.height_cm
        - MSJ_AGE_COEF * f64::from(profile.age)
        + sex_constant;

    let tdee = bmr * profile.activity_level.multiplier();

    (tdee * profile.goal.calorie_adjustment()).round()
}

/// Normalize a recovered tree into a nutrition plan
///
/// Never fails: missing or malformed fields take documented defaults
/// derived from the athlete's profile.
#[must_use]
pub fn normalize(tree: &Value, profile: &UserProfile) -> NutritionPlan {
    let daily_calories = tree::num(tree, "dailyCalories")
        .filter(|v| *v > 0.0)
        .map_or_else(|| estimate_daily_calories(profile), f64::round);

    let macros_tree = tree::child(tree, "macros");
    let split = profile.goal.macro_split();

    let macros = MacroTargets {
        protein: normalize_macro(
            tree::child(macros_tree, "protein"),
            daily_calories,
            f64::from(split.protein),
            PROTEIN_KCAL_PER_G,
        ),
        carbs: normalize_macro(
            tree::child(macros_tree, "carbs"),
            daily_calories,
            f64::from(split.carbs),
            CARBS_KCAL_PER_G,
        ),
        fats: normalize_macro(
            tree::child(macros_tree, "fats"),
            daily_calories,
            f64::from(split.fats),
            FAT_KCAL_PER_G,
        ),
    };

    let meals_tree = tree::child(tree, "mealPlan");
    let meal_plan = MealPlan {
        breakfast: normalize_slot(meals_tree.get("breakfast"), DEFAULT_BREAKFAST),
        lunch: normalize_slot(meals_tree.get("lunch"), DEFAULT_LUNCH),
        dinner: normalize_slot(meals_tree.get("dinner"), DEFAULT_DINNER),
        snacks: normalize_slot(meals_tree.get("snacks"), DEFAULT_SNACKS),
    };

    NutritionPlan {
        daily_calories,
        macros,
        meal_plan,
        goal: profile.goal,
        generated_at: Utc::now(),
    }
}

/// Resolve one macro target, deriving missing components from the daily
/// calories and the goal's percentage split
fn normalize_macro(
    macro_tree: &Value,
    daily_calories: f64,
    default_percentage: f64,
    kcal_per_gram: f64,
) -> MacroAmount {
    let percentage = tree::num(macro_tree, "percentage")
        .filter(|p| (0.0..=100.0).contains(p))
        .unwrap_or(default_percentage);

    let grams = tree::num(macro_tree, "grams")
        .filter(|g| *g >= 0.0)
        .unwrap_or_else(|| (daily_calories * percentage / 100.0 / kcal_per_gram).round());

    MacroAmount { grams, percentage }
}

/// Clamp a meal slot to the entry cap, substituting the canned list when
/// the provider returned nothing usable
fn normalize_slot(slot: Option<&Value>, default: &[&str]) -> Vec<Meal> {
    let meals: Vec<Meal> = match slot {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(normalize_meal)
            .take(MAX_MEALS_PER_SLOT)
            .collect(),
        _ => Vec::new(),
    };

    if meals.is_empty() {
        default
            .iter()
            .take(MAX_MEALS_PER_SLOT)
            .map(|name| Meal {
                name: (*name).to_owned(),
                calories: None,
            })
            .collect()
    } else {
        meals
    }
}

/// Coerce one meal entry; strings become named meals, objects keep their
/// calorie estimate, anything else is dropped
fn normalize_meal(entry: &Value) -> Option<Meal> {
    match entry {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| Meal {
                name: trimmed.to_owned(),
                calories: None,
            })
        }
        Value::Object(_) => Some(Meal {
            name: tree::text(entry, "name").unwrap_or_else(|| "Meal".to_owned()),
            calories: tree::num(entry, "calories").filter(|c| *c > 0.0),
        }),
        _ => None,
    }
}
