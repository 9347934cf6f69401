// ABOUTME: Main library entry point for the FormCoach AI coaching core
// ABOUTME: Recovers structured fitness records from free-form LLM responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

#![deny(unsafe_code)]

//! # FormCoach Core
//!
//! The coaching engine behind the FormCoach app. It turns free-form text
//! from a generative text provider into strongly-typed, range-validated
//! domain records: a physique assessment, a workout program, a nutrition
//! plan, or an exercise form analysis.
//!
//! Provider responses approximate JSON but are routinely truncated,
//! wrapped in prose or code fences, or missing required fields. The core
//! of this crate is the recovery pipeline that copes with that:
//!
//! 1. **Locate** the payload inside the noisy text ([`recovery::locate`])
//! 2. **Repair** it through a fixed ladder of deterministic textual fixes,
//!    re-parsing after each step ([`recovery::repair_and_parse`])
//! 3. **Normalize** the parsed tree against a domain schema with explicit
//!    default and clamping rules ([`intelligence`])
//!
//! Once a parse succeeds, normalization never fails: absent or malformed
//! fields are replaced by documented defaults so the caller always gets a
//! usable record.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formcoach_core::llm::OpenAiCompatibleProvider;
//! use formcoach_core::models::UserProfile;
//! use formcoach_core::services::CoachService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), formcoach_core::errors::AppError> {
//!     let provider = OpenAiCompatibleProvider::from_env()?;
//!     let service = CoachService::new(provider);
//!     let profile = UserProfile::default();
//!     let plan = service.generate_workout_plan(&profile).await?;
//!     println!("{} days scheduled", plan.schedule.len());
//!     Ok(())
//! }
//! ```

/// Unified error handling with standard error codes
pub mod errors;

/// Structured logging configuration built on tracing
pub mod logging;

/// Environment-driven configuration for the LLM endpoint
pub mod config;

/// Application constants: clamp ranges, default tables, canned content
pub mod constants;

/// Core domain models (`UserProfile`, goals, activity levels)
pub mod models;

/// LLM provider abstraction and the `OpenAI`-compatible implementation
pub mod llm;

/// Resilient structured-data recovery: payload location and repair ladder
pub mod recovery;

/// Per-domain schema normalizers producing validated records
pub mod intelligence;

/// Domain orchestrators tying prompts, provider calls, and recovery together
pub mod services;
