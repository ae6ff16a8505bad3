//! Slot assignment.
//!
//! # Algorithm
//!
//! One of two strategies is selected once per run:
//!
//! 1. **Technical round robin** — for `Technical` programs with at least
//!    one technical trainer: batches are dealt technical trainers in roster
//!    order, and each batch keeps its trainer for the entire run. Topics
//!    still rotate per day.
//! 2. **Constrained fair rotation** — everything else: each slot picks the
//!    least-used trainer, preferring one whose type differs from the
//!    batch's previous session and avoiding double booking within the same
//!    (day, session) time slot when the roster allows it.
//!
//! Both strategies are total: any input, however degenerate (empty roster,
//! more batches than trainers, a single-trainer roster), maps to a defined
//! schedule. Tie-breaks are deterministic, so identical inputs always
//! produce identical output sequences.
//!
//! # Complexity
//! O(batches × days × sessions × roster) for fair rotation.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashSet;

use crate::models::{Schedule, ScheduleEntry, Trainer, TrainerType, TrainingConfig, TrainingType};

/// Generates the complete schedule for one run.
///
/// Returns an empty schedule for an empty roster, regardless of
/// configuration. The inputs are never mutated; calling this twice with
/// the same arguments yields identical schedules.
///
/// # Example
///
/// ```
/// use trainer_rota::models::{Trainer, TrainerType, TrainingConfig, TrainingType};
/// use trainer_rota::scheduler::generate_schedule;
///
/// let config = TrainingConfig::new(TrainingType::Mixed, 2, 3, 2);
/// let roster = vec![
///     Trainer::new("t1", TrainerType::Aptitude).with_topic("Numbers"),
///     Trainer::new("t2", TrainerType::Verbal).with_topic("Grammar"),
/// ];
///
/// let schedule = generate_schedule(&config, &roster);
/// assert_eq!(schedule.entry_count(), 12);
/// ```
pub fn generate_schedule(config: &TrainingConfig, trainers: &[Trainer]) -> Schedule {
    if trainers.is_empty() {
        return Schedule::new();
    }

    let technical: Vec<usize> = (0..trainers.len())
        .filter(|&i| trainers[i].is_technical())
        .collect();

    if config.training_type == TrainingType::Technical && !technical.is_empty() {
        assign_round_robin(config, trainers, &technical)
    } else {
        assign_fair(config, trainers)
    }
}

/// Technical round robin: batch `b` is owned by the `(b-1) mod n`-th
/// technical trainer for the whole run. Emission is batch-major.
fn assign_round_robin(config: &TrainingConfig, trainers: &[Trainer], technical: &[usize]) -> Schedule {
    let mut schedule = Schedule::new();

    for batch in 1..=config.batches {
        let trainer = &trainers[technical[(batch as usize - 1) % technical.len()]];
        for day in 1..=config.days {
            for session in 1..=config.sessions_per_day {
                schedule.add_entry(slot_entry(batch, day, session, trainer));
            }
        }
    }

    schedule
}

/// Constrained fair rotation. Emission is day-major: day, then session,
/// then batch.
fn assign_fair(config: &TrainingConfig, trainers: &[Trainer]) -> Schedule {
    let mut schedule = Schedule::new();
    // Per-run state, owned by this invocation only.
    let mut usage = vec![0usize; trainers.len()];
    let mut last_type: Vec<Option<TrainerType>> = vec![None; config.batches as usize];

    for day in 1..=config.days {
        for session in 1..=config.sessions_per_day {
            // Trainers already booked in this exact (day, session) slot.
            let mut used_in_slot: HashSet<usize> = HashSet::new();

            for batch in 1..=config.batches {
                let prev = last_type[batch as usize - 1].as_ref();
                let selected = select_trainer(trainers, &usage, &used_in_slot, prev);
                let trainer = &trainers[selected];

                used_in_slot.insert(selected);
                usage[selected] += 1;
                last_type[batch as usize - 1] = Some(trainer.trainer_type.clone());
                schedule.add_entry(slot_entry(batch, day, session, trainer));
            }
        }
    }

    schedule
}

/// Picks a roster index for one slot.
///
/// Candidate precedence: slot-available trainers of a different type than
/// the batch's previous session; then any slot-available trainer; then,
/// when the slot is exhausted (batches outnumber trainers), the full
/// roster re-filtered by type difference; finally the full roster. The
/// winner is the first candidate in roster order among those with the
/// minimum usage count.
fn select_trainer(
    trainers: &[Trainer],
    usage: &[usize],
    used_in_slot: &HashSet<usize>,
    prev_type: Option<&TrainerType>,
) -> usize {
    let type_differs =
        |i: usize| prev_type.map_or(true, |prev| trainers[i].trainer_type != *prev);

    let available: Vec<usize> = (0..trainers.len())
        .filter(|i| !used_in_slot.contains(i))
        .collect();

    let mut candidates: Vec<usize> = available.iter().copied().filter(|&i| type_differs(i)).collect();
    if candidates.is_empty() {
        candidates = available;
    }
    if candidates.is_empty() {
        // Slot exhausted: accept a double booking, but still prefer a
        // type change where one exists.
        candidates = (0..trainers.len()).filter(|&i| type_differs(i)).collect();
        if candidates.is_empty() {
            candidates = (0..trainers.len()).collect();
        }
    }

    // First roster-order index among the minimum usage counts. An explicit
    // strictly-less fold keeps the tie-break stable (min_by_key would
    // return the last minimum).
    let mut best = candidates[0];
    for &i in &candidates[1..] {
        if usage[i] < usage[best] {
            best = i;
        }
    }
    best
}

fn slot_entry(batch: u32, day: u32, session: u32, trainer: &Trainer) -> ScheduleEntry {
    ScheduleEntry {
        batch,
        day,
        session,
        trainer_id: trainer.id.clone(),
        trainer_name: trainer.name.clone(),
        trainer_type: trainer.trainer_type.clone(),
        topic: trainer.topic_on_day(day).to_string(),
    }
}
