// ABOUTME: Application constants for the coaching core organized by domain
// ABOUTME: Clamp ranges, default tables, canned fallback content, and formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! Application constants organized by domain
//!
//! Every "what if this field is missing" decision made by the schema
//! normalizers resolves to a value defined here, so the full default
//! table is auditable in one place.

/// Recovery pipeline limits
pub mod recovery {
    /// Maximum characters of raw text retained in diagnostic previews.
    /// Errors never carry the full provider response.
    pub const DIAGNOSTIC_PREVIEW_CHARS: usize = 300;
}

/// Physique assessment ranges and defaults
pub mod physique {
    /// Valid muscle mass percentage range
    pub const MUSCLE_MASS_RANGE: (f64, f64) = (60.0, 95.0);

    /// Valid body fat percentage range
    pub const BODY_FAT_RANGE: (f64, f64) = (5.0, 35.0);

    /// Valid range for 1-10 assessment scores (symmetry, posture, convexity)
    pub const SCORE_RANGE: (f64, f64) = (1.0, 10.0);

    /// Muscle mass used when the provider omits the field
    pub const DEFAULT_MUSCLE_MASS: f64 = 75.0;

    /// Body fat used when the provider omits the field
    pub const DEFAULT_BODY_FAT: f64 = 20.0;

    /// Assessment score used when the provider omits the field
    pub const DEFAULT_SCORE: f64 = 5.0;

    /// Development score below which a muscle group is a weak point
    pub const WEAK_POINT_THRESHOLD: f64 = 6.0;

    /// Development score at or above which a muscle group is a strength
    pub const STRENGTH_POINT_THRESHOLD: f64 = 8.0;

    /// Fallback insight when the provider returns none
    pub const DEFAULT_INSIGHT: &str =
        "Overall development is balanced; continue progressive training across all muscle groups.";

    /// Fallback recommendation when the provider returns none
    pub const DEFAULT_RECOMMENDATION: &str =
        "Maintain consistent training frequency and reassess in four weeks.";
}

/// Workout plan defaults
pub mod workout {
    /// Sets per exercise when unspecified
    pub const DEFAULT_SETS: u32 = 3;

    /// Rep range when unspecified
    pub const DEFAULT_REPS: &str = "8-12";

    /// Target muscles when unspecified
    pub const DEFAULT_TARGET_MUSCLES: &[&str] = &["Full Body"];

    /// Plan name when unspecified
    pub const DEFAULT_PLAN_NAME: &str = "Custom Training Plan";

    /// Plan description when unspecified
    pub const DEFAULT_PLAN_DESCRIPTION: &str =
        "A progressive training plan tailored to your goal and experience level.";

    /// Plan duration when unspecified
    pub const DEFAULT_DURATION: &str = "4 weeks";

    /// Progress metrics tracked when the provider returns none
    pub const DEFAULT_PROGRESS_METRICS: &[&str] = &[
        "Body weight",
        "Strength on key lifts",
        "Progress photos",
        "Energy levels",
    ];

    /// Progress checkpoints when the provider returns none
    pub const DEFAULT_PROGRESS_CHECKPOINTS: &[&str] = &[
        "Week 1: establish baseline weights",
        "Week 2: form review on compound lifts",
        "Week 4: measurements and photos",
    ];
}

/// Nutrition plan formulas and defaults
///
/// Energy expenditure follows the Mifflin-St Jeor equation with standard
/// activity multipliers.
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247. <https://doi.org/10.1093/ajcn/51.2.241>
pub mod nutrition {
    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;

    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;

    /// Mifflin-St Jeor age coefficient (kcal per year, subtracted)
    pub const MSJ_AGE_COEF: f64 = 5.0;

    /// Mifflin-St Jeor constant for males
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;

    /// Mifflin-St Jeor constant for females
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Calories per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Calories per gram of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;

    /// Calories per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;

    /// Maximum entries kept per meal slot. Longer provider lists are
    /// disproportionately likely to be truncated mid-generation.
    pub const MAX_MEALS_PER_SLOT: usize = 2;

    /// Fallback breakfast entries
    pub const DEFAULT_BREAKFAST: &[&str] = &[
        "Oatmeal with berries and a scoop of whey protein",
        "Greek yogurt with honey and almonds",
    ];

    /// Fallback lunch entries
    pub const DEFAULT_LUNCH: &[&str] = &[
        "Grilled chicken breast with rice and mixed vegetables",
        "Tuna salad wrap with whole-grain tortilla",
    ];

    /// Fallback dinner entries
    pub const DEFAULT_DINNER: &[&str] = &[
        "Baked salmon with sweet potato and broccoli",
        "Lean beef stir-fry with brown rice",
    ];

    /// Fallback snack entries
    pub const DEFAULT_SNACKS: &[&str] = &[
        "Cottage cheese with pineapple",
        "Handful of mixed nuts and an apple",
    ];
}

/// Form analysis ranges and defaults
pub mod form {
    /// Valid range for form scores
    pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

    /// Score used when the provider omits a metric
    pub const DEFAULT_SCORE: f64 = 50.0;

    /// Fallback improvement when the provider returns none
    pub const DEFAULT_IMPROVEMENT: &str =
        "Record another set from a side angle for a more complete assessment.";

    /// Fallback tip when the provider returns none
    pub const DEFAULT_TIP: &str = "Brace your core and control the eccentric portion of each rep.";

    /// Fallback next step when the provider returns none
    pub const DEFAULT_NEXT_STEP: &str =
        "Repeat the movement at a lighter load and reassess your form.";
}
