//! Trainer model and topic rotation.
//!
//! A trainer is an identified roster member with an open type category and
//! a topic plan: either a single fixed topic or an ordered rotation cycle
//! of duration-weighted topic segments. The rotation is anchored at day 1
//! of the whole training and repeats every cycle length days, so the same
//! `(trainer, day)` pair always resolves to the same topic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel topic rendered when a trainer has no topic for a day.
pub const UNASSIGNED_TOPIC: &str = "-";

/// Trainer type category.
///
/// Open set: new categories may be introduced by configuration, so
/// equality comparison is the only operation the scheduler relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerType {
    /// Programming, tooling, and other technical sessions.
    Technical,
    /// Quantitative aptitude.
    Aptitude,
    /// Verbal ability.
    Verbal,
    /// Logical reasoning.
    LogicalReasoning,
    /// Configuration-defined category.
    Custom(String),
}

impl fmt::Display for TrainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerType::Technical => write!(f, "Technical"),
            TrainerType::Aptitude => write!(f, "Aptitude"),
            TrainerType::Verbal => write!(f, "Verbal"),
            TrainerType::LogicalReasoning => write!(f, "Logical Reasoning"),
            TrainerType::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// One segment of a rotation cycle: a topic taught for a run of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSegment {
    /// Topic name.
    pub topic: String,
    /// Number of consecutive days this segment covers (at least 1).
    pub duration_days: u32,
}

impl TopicSegment {
    /// Creates a segment; durations below 1 are clamped to 1.
    pub fn new(topic: impl Into<String>, duration_days: u32) -> Self {
        Self {
            topic: topic.into(),
            duration_days: duration_days.max(1),
        }
    }
}

/// Topic configuration for a trainer.
///
/// Exactly one of the two shapes is active; the enum makes the mutual
/// exclusivity a compile-time invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicPlan {
    /// One fixed topic for the whole run. Empty string means unassigned.
    Single(String),
    /// Ordered cycle of duration-weighted segments. The same topic name
    /// may recur non-contiguously as distinct segments.
    Rotation(Vec<TopicSegment>),
}

impl TopicPlan {
    /// Resolves the topic active on a 1-based absolute day.
    ///
    /// For a rotation plan, the day is reduced modulo the cycle length
    /// (sum of segment durations) and a linear scan locates the covering
    /// segment. Segments are contiguous and non-overlapping by
    /// construction, so no tie-break is needed. Pure and deterministic.
    pub fn topic_on_day(&self, day: u32) -> &str {
        match self {
            TopicPlan::Single(topic) => {
                if topic.is_empty() {
                    UNASSIGNED_TOPIC
                } else {
                    topic
                }
            }
            TopicPlan::Rotation(segments) => {
                if segments.is_empty() {
                    return UNASSIGNED_TOPIC;
                }
                // Stored zero durations count as one day, matching the
                // clamping in TopicSegment::new.
                let cycle: u64 = segments.iter().map(|s| s.duration_days.max(1) as u64).sum();
                let mut day_in_cycle = (day.max(1) as u64 - 1) % cycle;
                for segment in segments {
                    let duration = segment.duration_days.max(1) as u64;
                    if day_in_cycle < duration {
                        return &segment.topic;
                    }
                    day_in_cycle -= duration;
                }
                UNASSIGNED_TOPIC
            }
        }
    }

    /// Cycle length in days (1 for a single topic, 0 for an empty rotation).
    pub fn cycle_days(&self) -> u64 {
        match self {
            TopicPlan::Single(_) => 1,
            TopicPlan::Rotation(segments) => {
                segments.iter().map(|s| s.duration_days.max(1) as u64).sum()
            }
        }
    }
}

impl Default for TopicPlan {
    fn default() -> Self {
        TopicPlan::Single(String::new())
    }
}

/// A roster member available for slot assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Unique identifier, stable across one scheduling run.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Type category (compared by equality only).
    pub trainer_type: TrainerType,
    /// Topic configuration.
    pub topics: TopicPlan,
}

impl Trainer {
    /// Creates a trainer with an unassigned single topic.
    pub fn new(id: impl Into<String>, trainer_type: TrainerType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            trainer_type,
            topics: TopicPlan::default(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a single fixed topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics = TopicPlan::Single(topic.into());
        self
    }

    /// Sets a full rotation cycle.
    pub fn with_rotation(mut self, segments: Vec<TopicSegment>) -> Self {
        self.topics = TopicPlan::Rotation(segments);
        self
    }

    /// Appends one rotation segment, converting a single-topic plan into
    /// a rotation if needed (a non-empty single topic is discarded).
    pub fn with_segment(mut self, topic: impl Into<String>, duration_days: u32) -> Self {
        let segment = TopicSegment::new(topic, duration_days);
        match &mut self.topics {
            TopicPlan::Rotation(segments) => segments.push(segment),
            TopicPlan::Single(_) => self.topics = TopicPlan::Rotation(vec![segment]),
        }
        self
    }

    /// Resolves this trainer's topic for a 1-based absolute day.
    pub fn topic_on_day(&self, day: u32) -> &str {
        self.topics.topic_on_day(day)
    }

    /// Whether this trainer belongs to the technical category.
    pub fn is_technical(&self) -> bool {
        self.trainer_type == TrainerType::Technical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_builder() {
        let t = Trainer::new("t1", TrainerType::Aptitude)
            .with_name("Asha")
            .with_topic("Number Systems");
        assert_eq!(t.id, "t1");
        assert_eq!(t.name, "Asha");
        assert_eq!(t.trainer_type, TrainerType::Aptitude);
        assert_eq!(t.topics, TopicPlan::Single("Number Systems".into()));
    }

    #[test]
    fn test_single_topic_ignores_day() {
        let t = Trainer::new("t1", TrainerType::Verbal).with_topic("Grammar");
        assert_eq!(t.topic_on_day(1), "Grammar");
        assert_eq!(t.topic_on_day(37), "Grammar");
    }

    #[test]
    fn test_empty_single_topic_is_unassigned() {
        let t = Trainer::new("t1", TrainerType::Verbal).with_topic("");
        for day in 1..=5 {
            assert_eq!(t.topic_on_day(day), UNASSIGNED_TOPIC);
        }
    }

    #[test]
    fn test_empty_rotation_is_unassigned() {
        let t = Trainer::new("t1", TrainerType::Technical).with_rotation(vec![]);
        assert_eq!(t.topic_on_day(1), UNASSIGNED_TOPIC);
        assert_eq!(t.topics.cycle_days(), 0);
    }

    #[test]
    fn test_rotation_cycle() {
        // Segments (X,2)(Y,4)(Z,1)(X,3): cycle length 10.
        let t = Trainer::new("t1", TrainerType::Technical)
            .with_segment("X", 2)
            .with_segment("Y", 4)
            .with_segment("Z", 1)
            .with_segment("X", 3);
        assert_eq!(t.topics.cycle_days(), 10);

        let expected = ["X", "X", "Y", "Y", "Y", "Y", "Z", "X", "X", "X"];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(t.topic_on_day(i as u32 + 1), *want, "day {}", i + 1);
        }
        // Cycle repeats: day 11 resolves like day 1.
        assert_eq!(t.topic_on_day(11), t.topic_on_day(1));
        assert_eq!(t.topic_on_day(11), "X");
        assert_eq!(t.topic_on_day(20), "X");
        assert_eq!(t.topic_on_day(23), "Y");
    }

    #[test]
    fn test_repeated_topic_segments_are_distinct() {
        let t = Trainer::new("t1", TrainerType::Technical)
            .with_segment("SQL", 1)
            .with_segment("Java", 1)
            .with_segment("SQL", 2);
        assert_eq!(t.topic_on_day(1), "SQL");
        assert_eq!(t.topic_on_day(2), "Java");
        assert_eq!(t.topic_on_day(3), "SQL");
        assert_eq!(t.topic_on_day(4), "SQL");
        assert_eq!(t.topic_on_day(5), "SQL"); // wraps to segment 1
    }

    #[test]
    fn test_segment_duration_clamped() {
        assert_eq!(TopicSegment::new("X", 0).duration_days, 1);

        // A zero duration smuggled in through the public field still
        // counts as one day at resolution time.
        let t = Trainer::new("t1", TrainerType::Technical).with_rotation(vec![
            TopicSegment {
                topic: "A".into(),
                duration_days: 0,
            },
            TopicSegment::new("B", 1),
        ]);
        assert_eq!(t.topic_on_day(1), "A");
        assert_eq!(t.topic_on_day(2), "B");
        assert_eq!(t.topic_on_day(3), "A");
    }

    #[test]
    fn test_with_segment_replaces_single_topic() {
        let t = Trainer::new("t1", TrainerType::Technical)
            .with_topic("Old")
            .with_segment("New", 2);
        assert_eq!(t.topics, TopicPlan::Rotation(vec![TopicSegment::new("New", 2)]));
    }

    #[test]
    fn test_trainer_type_display() {
        assert_eq!(TrainerType::LogicalReasoning.to_string(), "Logical Reasoning");
        assert_eq!(TrainerType::Custom("Design".into()).to_string(), "Design");
    }

    #[test]
    fn test_trainer_serde_round_trip() {
        let t = Trainer::new("t9", TrainerType::Custom("Design".into()))
            .with_name("Mori")
            .with_segment("Figma", 2)
            .with_segment("Typography", 1);
        let json = serde_json::to_string(&t).unwrap();
        let back: Trainer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
