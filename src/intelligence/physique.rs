// ABOUTME: Physique assessment schema normalizer
// ABOUTME: Clamps assessment scores and derives weak/strength points from muscle groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Physique Assessment
//!
//! Normalizes a recovered provider tree into a [`PhysiqueAnalysis`].
//! Composition estimates clamp to physiologically plausible ranges and
//! weak/strength points derive from per-muscle-group development scores
//! when the provider did not supply them explicitly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree;
use crate::constants::physique::{
    BODY_FAT_RANGE, DEFAULT_BODY_FAT, DEFAULT_INSIGHT, DEFAULT_MUSCLE_MASS,
    DEFAULT_RECOMMENDATION, DEFAULT_SCORE, MUSCLE_MASS_RANGE, SCORE_RANGE,
    STRENGTH_POINT_THRESHOLD, WEAK_POINT_THRESHOLD,
};

/// Per-muscle-group assessment scores
///
/// Scores are on a 1-10 scale; a score of 0 means the provider did not
/// rate that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupRating {
    /// Development score (1-10, 0 when unrated)
    pub development: f64,
    /// Convexity score (1-10, 0 when unrated)
    pub convexity: f64,
    /// Symmetry score (1-10, 0 when unrated)
    pub symmetry: f64,
    /// Free-form assessment notes
    pub notes: String,
}

/// Validated physique assessment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiqueAnalysis {
    /// Estimated muscle mass percentage (60-95)
    pub muscle_mass: f64,
    /// Estimated body fat percentage (5-35)
    pub body_fat: f64,
    /// Overall symmetry score (1-10)
    pub symmetry: f64,
    /// Posture score (1-10)
    pub posture: f64,
    /// Overall convexity score (1-10)
    pub overall_convexity: f64,
    /// Per-muscle-group assessment
    pub muscle_groups: BTreeMap<String, MuscleGroupRating>,
    /// Muscle groups needing focused work
    pub weak_points: Vec<String>,
    /// Well-developed muscle groups
    pub strength_points: Vec<String>,
    /// Narrative insights from the assessment
    pub insights: Vec<String>,
    /// Actionable recommendations
    pub recommendations: Vec<String>,
    /// When the assessment was produced
    pub generated_at: DateTime<Utc>,
}

/// Normalize a recovered tree into a physique assessment
///
/// Never fails: missing or malformed fields take documented defaults.
/// Weak and strength points are recomputed from muscle-group development
/// scores **only when the tree omits the corresponding array**; a
/// supplied array is used verbatim, even when empty.
#[must_use]
pub fn normalize(tree: &Value) -> PhysiqueAnalysis {
    let muscle_groups = normalize_muscle_groups(tree.get("muscleGroups"));

    let weak_points = tree::string_list(tree, "weakPoints")
        .unwrap_or_else(|| groups_below(&muscle_groups, WEAK_POINT_THRESHOLD));
    let strength_points = tree::string_list(tree, "strengthPoints")
        .unwrap_or_else(|| groups_at_or_above(&muscle_groups, STRENGTH_POINT_THRESHOLD));

    PhysiqueAnalysis {
        muscle_mass: tree::clamp_or(
            tree::num(tree, "muscleMass"),
            MUSCLE_MASS_RANGE,
            DEFAULT_MUSCLE_MASS,
        ),
        body_fat: tree::clamp_or(tree::num(tree, "bodyFat"), BODY_FAT_RANGE, DEFAULT_BODY_FAT),
        symmetry: tree::clamp_or(tree::num(tree, "symmetry"), SCORE_RANGE, DEFAULT_SCORE),
        posture: tree::clamp_or(tree::num(tree, "posture"), SCORE_RANGE, DEFAULT_SCORE),
        overall_convexity: tree::clamp_or(
            tree::num(tree, "overallConvexity"),
            SCORE_RANGE,
            DEFAULT_SCORE,
        ),
        muscle_groups,
        weak_points,
        strength_points,
        insights: tree::string_list_or(tree, "insights", &[DEFAULT_INSIGHT]),
        recommendations: tree::string_list_or(tree, "recommendations", &[DEFAULT_RECOMMENDATION]),
        generated_at: Utc::now(),
    }
}

/// Normalize the per-group ratings map
fn normalize_muscle_groups(groups: Option<&Value>) -> BTreeMap<String, MuscleGroupRating> {
    let Some(Value::Object(map)) = groups else {
        return BTreeMap::new();
    };

    map.iter()
        .map(|(name, rating)| (name.clone(), normalize_rating(name, rating)))
        .collect()
}

/// Normalize a single group rating
///
/// Rated dimensions clamp to 1-10; unrated ones stay at 0 so the weak
/// point derivation can see them.
fn normalize_rating(name: &str, rating: &Value) -> MuscleGroupRating {
    MuscleGroupRating {
        development: rated_score(rating, "development"),
        convexity: rated_score(rating, "convexity"),
        symmetry: rated_score(rating, "symmetry"),
        notes: tree::text(rating, "notes").unwrap_or_else(|| format!("{name} analysis pending")),
    }
}

fn rated_score(rating: &Value, key: &str) -> f64 {
    tree::num(rating, key).map_or(0.0, |v| v.clamp(SCORE_RANGE.0, SCORE_RANGE.1))
}

fn groups_below(groups: &BTreeMap<String, MuscleGroupRating>, threshold: f64) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, rating)| rating.development < threshold)
        .map(|(name, _)| name.clone())
        .collect()
}

fn groups_at_or_above(groups: &BTreeMap<String, MuscleGroupRating>, threshold: f64) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, rating)| rating.development >= threshold)
        .map(|(name, _)| name.clone())
        .collect()
}
