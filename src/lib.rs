//! Trainer rostering for multi-day, multi-batch training programs.
//!
//! Provides domain models and a deterministic assignment algorithm that maps
//! every (batch, day, session) slot to exactly one trainer, honoring trainer
//! type adjacency constraints and workload fairness, and resolving each
//! trainer's active topic via a cyclic duration-weighted rotation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TrainingConfig`, `Trainer`, `TopicPlan`,
//!   `Schedule`, `ScheduleEntry`
//! - **`scheduler`**: Slot assignment (`generate_schedule`) and roster
//!   quality metrics (`RosterKpi`)
//! - **`validation`**: Structural input checks (duplicate IDs, zero counts,
//!   empty rotation cycles)
//!
//! # Architecture
//!
//! This crate is a pure domain library: no I/O, no persistence, no output
//! formatting. Configuration editing, topic-file ingestion, and table/PDF/
//! spreadsheet rendering are external collaborators that consume the
//! `Schedule` produced here. The assignment algorithm is total — every
//! input, however degenerate, maps to a defined schedule rather than an
//! error; degraded outcomes (double bookings, forced same-type adjacency)
//! are observable through `RosterKpi`.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod models;
pub mod scheduler;
pub mod validation;
