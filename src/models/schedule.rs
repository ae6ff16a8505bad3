//! Schedule (output) model.
//!
//! A schedule is the ordered sequence of slot assignments produced by one
//! run of the assigner: exactly one entry per (batch, day, session) triple,
//! in emission order. Rendering and export collaborators consume it as-is;
//! the query helpers here cover the label sets and per-trainer filters they
//! need, but pivoting into a display matrix is left to them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TrainerType;

/// One slot assignment: a trainer teaching a topic in a specific
/// (batch, day, session) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based batch number.
    pub batch: u32,
    /// 1-based day number.
    pub day: u32,
    /// 1-based session number within the day.
    pub session: u32,
    /// Assigned trainer's ID.
    pub trainer_id: String,
    /// Assigned trainer's display name (denormalized for rendering).
    pub trainer_name: String,
    /// Assigned trainer's type category.
    pub trainer_type: TrainerType,
    /// Topic resolved for this day (`-` if none).
    pub topic: String,
}

impl ScheduleEntry {
    /// Positional batch label, e.g. `Batch 3`.
    pub fn batch_label(&self) -> String {
        format!("Batch {}", self.batch)
    }

    /// Positional day label, e.g. `Day 1`.
    pub fn day_label(&self) -> String {
        format!("Day {}", self.day)
    }

    /// Positional session label, e.g. `Session 2`.
    pub fn session_label(&self) -> String {
        format!("Session {}", self.session)
    }
}

/// A complete schedule for one run.
///
/// Entries appear in the assigner's emission order (batch-major for the
/// technical round robin, day-major for fair rotation) and are regenerated
/// in full on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Slot assignments in emission order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one batch, in emission order.
    pub fn entries_for_batch(&self, batch: u32) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.batch == batch).collect()
    }

    /// Entries assigned to one trainer, in emission order.
    pub fn entries_for_trainer(&self, trainer_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.trainer_id == trainer_id)
            .collect()
    }

    /// Entries across all batches for one (day, session) time slot.
    pub fn entries_in_slot(&self, day: u32, session: u32) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.day == day && e.session == session)
            .collect()
    }

    /// Slot count per trainer ID.
    pub fn usage_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for e in &self.entries {
            *counts.entry(e.trainer_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct batch labels in ascending numeric order.
    pub fn batch_labels(&self) -> Vec<String> {
        Self::labels(self.entries.iter().map(|e| e.batch), "Batch")
    }

    /// Distinct day labels in ascending numeric order.
    pub fn day_labels(&self) -> Vec<String> {
        Self::labels(self.entries.iter().map(|e| e.day), "Day")
    }

    /// Distinct session labels in ascending numeric order.
    pub fn session_labels(&self) -> Vec<String> {
        Self::labels(self.entries.iter().map(|e| e.session), "Session")
    }

    fn labels(values: impl Iterator<Item = u32>, prefix: &str) -> Vec<String> {
        let mut distinct: Vec<u32> = values.collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.into_iter().map(|v| format!("{prefix} {v}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(batch: u32, day: u32, session: u32, trainer_id: &str) -> ScheduleEntry {
        ScheduleEntry {
            batch,
            day,
            session,
            trainer_id: trainer_id.into(),
            trainer_name: trainer_id.to_uppercase(),
            trainer_type: TrainerType::Aptitude,
            topic: "-".into(),
        }
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_entry(entry(1, 1, 1, "a"));
        s.add_entry(entry(2, 1, 1, "b"));
        s.add_entry(entry(1, 1, 2, "b"));
        s.add_entry(entry(2, 1, 2, "a"));
        s.add_entry(entry(1, 2, 1, "a"));
        s.add_entry(entry(2, 2, 1, "b"));
        s
    }

    #[test]
    fn test_entry_labels() {
        let e = entry(3, 1, 2, "a");
        assert_eq!(e.batch_label(), "Batch 3");
        assert_eq!(e.day_label(), "Day 1");
        assert_eq!(e.session_label(), "Session 2");
    }

    #[test]
    fn test_entries_for_batch() {
        let s = sample_schedule();
        let b1 = s.entries_for_batch(1);
        assert_eq!(b1.len(), 3);
        assert!(b1.iter().all(|e| e.batch == 1));
        assert!(s.entries_for_batch(9).is_empty());
    }

    #[test]
    fn test_entries_for_trainer() {
        let s = sample_schedule();
        assert_eq!(s.entries_for_trainer("a").len(), 3);
        assert_eq!(s.entries_for_trainer("b").len(), 3);
        assert!(s.entries_for_trainer("zz").is_empty());
    }

    #[test]
    fn test_entries_in_slot() {
        let s = sample_schedule();
        let slot = s.entries_in_slot(1, 1);
        assert_eq!(slot.len(), 2);
        assert_eq!(slot[0].trainer_id, "a");
        assert_eq!(slot[1].trainer_id, "b");
    }

    #[test]
    fn test_usage_counts() {
        let s = sample_schedule();
        let counts = s.usage_counts();
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 3);
    }

    #[test]
    fn test_label_sets_sorted_and_distinct() {
        let mut s = sample_schedule();
        // Out-of-order insertion must not affect label ordering.
        s.add_entry(entry(10, 3, 1, "a"));
        assert_eq!(s.batch_labels(), vec!["Batch 1", "Batch 2", "Batch 10"]);
        assert_eq!(s.day_labels(), vec!["Day 1", "Day 2", "Day 3"]);
        assert_eq!(s.session_labels(), vec!["Session 1", "Session 2"]);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.entry_count(), 0);
        assert!(s.batch_labels().is_empty());
        assert!(s.usage_counts().is_empty());
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
