//! Trainer rostering domain models.
//!
//! Core data types for one scheduling run: the immutable `TrainingConfig`,
//! the `Trainer` roster with per-trainer `TopicPlan`s, and the `Schedule`
//! output consumed by rendering and export collaborators.

mod config;
mod schedule;
mod trainer;

pub use config::{TrainingConfig, TrainingType};
pub use schedule::{Schedule, ScheduleEntry};
pub use trainer::{TopicPlan, TopicSegment, Trainer, TrainerType, UNASSIGNED_TOPIC};
