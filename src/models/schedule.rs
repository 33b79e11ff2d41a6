//! Generated timetable (solution) model.
//!
//! A [`GeneratedSchedule`] is produced once per generation run and never
//! updated afterwards; a new run yields a new value.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{same_code, TimeOfDay, TimeSlot, Weekday};

/// One placed activity: which slot was chosen and when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    /// Placed activity.
    pub activity_code: String,
    /// Days of the chosen slot.
    pub days: Vec<Weekday>,
    /// Start of the chosen slot.
    pub start_time: TimeOfDay,
    /// End of the chosen slot.
    pub end_time: TimeOfDay,
    /// Index of the chosen slot in the activity's `available_slots`.
    pub slot_index: usize,
}

impl ScheduleSlot {
    /// Creates a placement record from an activity's slot.
    pub fn from_slot(activity_code: impl Into<String>, slot_index: usize, slot: &TimeSlot) -> Self {
        Self {
            activity_code: activity_code.into(),
            days: slot.days.clone(),
            start_time: slot.start_time,
            end_time: slot.end_time,
            slot_index,
        }
    }

    /// Length of one occurrence in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }
}

/// Search strategy used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Exhaustive depth-first search; maximal for small inputs.
    Backtracking,
    /// Single-pass first fit; fast, approximate.
    Greedy,
}

impl Algorithm {
    /// Lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work done by the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Search nodes expanded (one per activity step visited).
    pub nodes_visited: u64,
    /// Whether the node budget ran out before the search finished.
    /// When set, the schedule is the best found so far, not a proven maximum.
    pub budget_exhausted: bool,
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchedule {
    /// Chosen placements, at most one per activity.
    pub schedule: Vec<ScheduleSlot>,
    /// One message per activity that could not be placed.
    pub conflicts: Vec<String>,
    /// Number of activities in the input.
    pub total_activities: usize,
    /// Number of distinct activities placed.
    pub scheduled_activities: usize,
    /// Strategy that produced this result.
    pub algorithm: Algorithm,
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
    /// Dependency requirements not met by the chosen schedule.
    ///
    /// Diagnostic only; empty in correct operation. `None` when the input
    /// declared no dependencies at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_violations: Option<Vec<String>>,
    /// Search effort.
    #[serde(default)]
    pub stats: SearchStats,
}

impl GeneratedSchedule {
    /// Finds the placement of an activity (case-insensitive).
    pub fn slot_for_activity(&self, activity_code: &str) -> Option<&ScheduleSlot> {
        self.schedule
            .iter()
            .find(|s| same_code(&s.activity_code, activity_code))
    }

    /// Whether an activity was placed.
    pub fn is_scheduled(&self, activity_code: &str) -> bool {
        self.slot_for_activity(activity_code).is_some()
    }

    /// Placements occurring on a day, ordered by start time.
    pub fn slots_on(&self, day: Weekday) -> Vec<&ScheduleSlot> {
        let mut slots: Vec<&ScheduleSlot> =
            self.schedule.iter().filter(|s| s.days.contains(&day)).collect();
        slots.sort_by_key(|s| (s.start_time, s.end_time));
        slots
    }

    /// Whether any activity was left unplaced.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Whether the diagnostic pass found broken dependencies.
    pub fn has_dependency_violations(&self) -> bool {
        self.dependency_violations
            .as_ref()
            .is_some_and(|v| !v.is_empty())
    }
}
