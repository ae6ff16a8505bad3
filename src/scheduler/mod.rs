//! Slot assignment and schedule quality metrics.
//!
//! # Algorithm
//!
//! `generate_schedule` is a pure, deterministic function from a
//! `(TrainingConfig, roster)` pair to a complete `Schedule`: one entry per
//! (batch, day, session) slot, no gaps, no duplicates, no error paths.
//! Technical programs with technical trainers use a per-batch round robin;
//! all other programs use constrained fair rotation with type-adjacency
//! avoidance and least-usage tie-breaking.
//!
//! # KPI
//!
//! `RosterKpi` quantifies a finished schedule: usage fairness, double
//! bookings, and same-type adjacencies.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

mod assign;
mod kpi;

pub use assign::generate_schedule;
pub use kpi::RosterKpi;
