//! Training run configuration.
//!
//! Describes the shape of one training program: how many batches run in
//! parallel, over how many days, with how many sessions per day, and which
//! assignment regime applies (technical, mixed, or non-technical).

use serde::{Deserialize, Serialize};

/// Assignment regime for a training program.
///
/// `Technical` enables the technical-only round robin when at least one
/// technical trainer is on the roster; `Mixed` and `NonTechnical` always
/// use constrained fair rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingType {
    /// Technical program: one technical trainer owns each batch.
    Technical,
    /// Mixed program: technical and non-technical sessions interleave.
    Mixed,
    /// Non-technical program (aptitude, verbal, logical reasoning).
    NonTechnical,
}

/// Immutable configuration for one scheduling run.
///
/// Supplied fresh for each run by the configuration-editing surface.
/// Counts are expected to be positive; a zero in any count yields an empty
/// schedule rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Display name of the training program.
    pub name: String,
    /// Assignment regime.
    pub training_type: TrainingType,
    /// Number of parallel batches.
    pub batches: u32,
    /// Number of training days.
    pub days: u32,
    /// Number of sessions per day.
    pub sessions_per_day: u32,
}

impl TrainingConfig {
    /// Creates a configuration with the given regime and counts.
    pub fn new(training_type: TrainingType, batches: u32, days: u32, sessions_per_day: u32) -> Self {
        Self {
            name: String::new(),
            training_type,
            batches,
            days,
            sessions_per_day,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Total number of (batch, day, session) slots in the run.
    pub fn slot_count(&self) -> u64 {
        self.batches as u64 * self.days as u64 * self.sessions_per_day as u64
    }
}
