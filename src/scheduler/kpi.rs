//! Roster quality metrics (KPIs).
//!
//! Computes fairness and constraint-quality indicators from a completed
//! schedule. The assigner never fails; when the roster is too small for
//! the configuration it degrades (double bookings, forced same-type
//! adjacency) instead, and these metrics make that degradation visible.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Usage spread | max - min slots per roster trainer |
//! | Double-booked slots | Repeat appearances within one (day, session) |
//! | Same-type adjacencies | Per batch, consecutive sessions sharing a type |
//! | Distinct trainers used | Roster members with at least one slot |
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering"

use std::collections::{HashMap, HashSet};

use crate::models::{Schedule, Trainer};

/// Fairness and quality indicators for one schedule.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Total number of assigned slots.
    pub slot_count: usize,
    /// Slots per trainer ID, including zero-usage roster members.
    pub usage_by_trainer: HashMap<String, usize>,
    /// Smallest per-trainer slot count.
    pub min_usage: usize,
    /// Largest per-trainer slot count.
    pub max_usage: usize,
    /// `max_usage - min_usage`.
    pub usage_spread: usize,
    /// Repeat appearances of a trainer within a single (day, session)
    /// time slot, summed over all slots.
    pub double_booked_slots: usize,
    /// Consecutive same-type session pairs, summed over all batches.
    pub same_type_adjacencies: usize,
    /// Number of roster members that received at least one slot.
    pub distinct_trainers_used: usize,
}

impl RosterKpi {
    /// Computes KPIs from a schedule and the roster it was generated from.
    ///
    /// Roster members absent from the schedule count as zero usage, so
    /// the spread reflects the whole roster, not just assigned trainers.
    pub fn calculate(schedule: &Schedule, trainers: &[Trainer]) -> Self {
        let mut usage_by_trainer: HashMap<String, usize> = trainers
            .iter()
            .map(|t| (t.id.clone(), 0))
            .collect();
        for entry in &schedule.entries {
            *usage_by_trainer.entry(entry.trainer_id.clone()).or_insert(0) += 1;
        }

        let min_usage = usage_by_trainer.values().copied().min().unwrap_or(0);
        let max_usage = usage_by_trainer.values().copied().max().unwrap_or(0);

        // Double bookings: entries beyond the first per (day, session, trainer).
        let mut slot_appearances: HashMap<(u32, u32, &str), usize> = HashMap::new();
        for entry in &schedule.entries {
            *slot_appearances
                .entry((entry.day, entry.session, entry.trainer_id.as_str()))
                .or_insert(0) += 1;
        }
        let double_booked_slots = slot_appearances.values().map(|&n| n - 1).sum();

        // Same-type adjacency: per batch, in (day, session) order.
        let batches: HashSet<u32> = schedule.entries.iter().map(|e| e.batch).collect();
        let mut same_type_adjacencies = 0;
        for batch in batches {
            let mut entries = schedule.entries_for_batch(batch);
            entries.sort_by_key(|e| (e.day, e.session));
            for pair in entries.windows(2) {
                if pair[0].trainer_type == pair[1].trainer_type {
                    same_type_adjacencies += 1;
                }
            }
        }

        let distinct_trainers_used = usage_by_trainer.values().filter(|&&n| n > 0).count();

        Self {
            slot_count: schedule.entry_count(),
            usage_by_trainer,
            min_usage,
            max_usage,
            usage_spread: max_usage - min_usage,
            double_booked_slots,
            same_type_adjacencies,
            distinct_trainers_used,
        }
    }

    /// Whether the schedule stays within the given degradation bounds.
    pub fn meets_thresholds(&self, max_spread: usize, max_double_bookings: usize) -> bool {
        self.usage_spread <= max_spread && self.double_booked_slots <= max_double_bookings
    }
}
