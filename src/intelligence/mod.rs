// ABOUTME: Per-domain schema normalizers producing validated coaching records
// ABOUTME: Shared tree-coercion helpers plus the physique, workout, nutrition, and form schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Schema Normalizers
//!
//! One normalizer per coaching domain, each mapping a recovered
//! [`serde_json::Value`] tree onto a concrete record type. Normalization
//! **never fails**: once text has been recovered into some structured
//! shape, a degraded-but-usable record beats propagating an error to the
//! athlete. Every "what if this field is missing" decision lives here (and
//! in [`crate::constants`]), not scattered across call sites.
//!
//! Missing fields take documented defaults, numeric fields clamp to their
//! valid ranges, oversized arrays truncate, and secondary fields (weak and
//! strong points) derive from primary ones when the provider omitted them.

/// Exercise form analysis schema and the frame-metrics capability
pub mod form;

/// Nutrition plan schema with energy-expenditure defaults
pub mod nutrition;

/// Physique assessment schema
pub mod physique;

/// Workout plan schema
pub mod workout;

pub use form::{FormAnalysis, FormMetricsProvider, FrameMetrics, UnavailableFrameMetrics};
pub use nutrition::NutritionPlan;
pub use physique::PhysiqueAnalysis;
pub use workout::WorkoutPlan;

pub(crate) mod tree {
    //! Coercion helpers for reading loosely-typed provider trees

    use serde_json::Value;

    /// Sentinel standing in for absent branches of the tree
    static NULL: Value = Value::Null;

    /// Borrow a nested child value, yielding null when the key is absent
    /// so lookups chain without unwrapping
    pub fn child<'a>(tree: &'a Value, key: &str) -> &'a Value {
        tree.get(key).unwrap_or(&NULL)
    }

    /// Read a numeric field, accepting numbers and numeric strings
    pub fn num(tree: &Value, key: &str) -> Option<f64> {
        match tree.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Clamp an optional numeric value into a range, with a default for
    /// missing or non-numeric input
    pub fn clamp_or(value: Option<f64>, range: (f64, f64), default: f64) -> f64 {
        value.map_or(default, |v| v.clamp(range.0, range.1))
    }

    /// Read a non-empty trimmed string field
    pub fn text(tree: &Value, key: &str) -> Option<String> {
        tree.get(key)?
            .as_str()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
    }

    /// Read an array field as strings, dropping entries that are neither
    /// strings nor numbers
    ///
    /// Returns `None` when the key is absent or not an array, so callers
    /// can distinguish "omitted" from "supplied but empty".
    pub fn string_list(tree: &Value, key: &str) -> Option<Vec<String>> {
        let items = tree.get(key)?.as_array()?;
        Some(items.iter().filter_map(as_display_string).collect())
    }

    /// Read an array field as strings, substituting a canned default when
    /// the result would be empty
    pub fn string_list_or(tree: &Value, key: &str, default: &[&str]) -> Vec<String> {
        match string_list(tree, key) {
            Some(list) if !list.is_empty() => list,
            _ => default.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    fn as_display_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

}
