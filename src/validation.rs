//! Structural input validation.
//!
//! Advisory pre-checks for editing surfaces: duplicate trainer IDs, zero
//! configuration counts, and degenerate rotation cycles. The assignment
//! algorithm itself is total and accepts any input; these checks exist so
//! callers can surface problems before generating a schedule that is
//! technically defined but probably not what the user meant.
//!
//! An empty roster and a roster smaller than the batch count are *not*
//! errors: both are legitimate, schedulable states (an empty schedule and
//! a schedule with double bookings, respectively).

use std::collections::HashSet;

use crate::models::{TopicPlan, Trainer, TrainingConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two trainers share the same ID.
    DuplicateId,
    /// A batch, day, or session count is zero.
    ZeroCount,
    /// A rotation plan has no segments.
    EmptyRotation,
    /// A rotation segment has a zero duration.
    ZeroDurationSegment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a configuration and roster before scheduling.
///
/// Checks:
/// 1. All three configuration counts are positive
/// 2. No duplicate trainer IDs
/// 3. No rotation plan is empty
/// 4. No rotation segment has a zero duration
///
/// All issues are collected; nothing short-circuits.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(config: &TrainingConfig, trainers: &[Trainer]) -> ValidationResult {
    let mut errors = Vec::new();

    for (count, field) in [
        (config.batches, "batches"),
        (config.days, "days"),
        (config.sessions_per_day, "sessions per day"),
    ] {
        if count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCount,
                format!("Configuration has zero {field}"),
            ));
        }
    }

    let mut ids = HashSet::new();
    for trainer in trainers {
        if !ids.insert(trainer.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate trainer ID: {}", trainer.id),
            ));
        }

        if let TopicPlan::Rotation(segments) = &trainer.topics {
            if segments.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyRotation,
                    format!("Trainer '{}' has a rotation with no segments", trainer.id),
                ));
            }
            for (i, segment) in segments.iter().enumerate() {
                if segment.duration_days == 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ZeroDurationSegment,
                        format!(
                            "Trainer '{}' rotation segment {} ('{}') has zero duration",
                            trainer.id, i, segment.topic
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
