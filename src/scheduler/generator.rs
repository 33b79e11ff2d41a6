//! Timetable generation entry point.
//!
//! Validates the input, picks a strategy, runs it, and assembles the
//! [`GeneratedSchedule`] with its conflict list and dependency diagnostics.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use super::space::{SearchSpace, SlotRef};
use super::{backtracking, greedy, GeneratorConfig};
use crate::error::{Result, TimetableError};
use crate::models::{Activity, Algorithm, GeneratedSchedule, ScheduleSlot};
use crate::validation::validate_input;

/// Places activities on a weekly timetable.
///
/// Small inputs (up to [`GeneratorConfig::backtracking_limit`] activities)
/// are solved exhaustively and get a maximal schedule. Larger inputs use
/// single-pass first fit.
///
/// Generation is deterministic: the same input and configuration always
/// yield the same schedule, conflicts, and diagnostics.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Activity, Algorithm, TimeSlot, Weekday};
/// use u_timetable::scheduler::ScheduleGenerator;
///
/// let activities = vec![
///     Activity::new("MATH101")
///         .with_slot(TimeSlot::parse([Weekday::Monday], "9:00 AM", "10:00 AM").unwrap()),
///     Activity::new("PHYS101")
///         .with_slot(TimeSlot::parse([Weekday::Monday], "9:30 AM", "10:30 AM").unwrap())
///         .with_slot(TimeSlot::parse([Weekday::Tuesday], "9:00 AM", "10:00 AM").unwrap()),
/// ];
///
/// let result = ScheduleGenerator::new().generate(&activities).unwrap();
/// assert_eq!(result.algorithm, Algorithm::Backtracking);
/// assert_eq!(result.scheduled_activities, 2);
/// assert_eq!(result.slot_for_activity("PHYS101").unwrap().slot_index, 1);
/// assert!(result.conflicts.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a timetable.
    ///
    /// # Errors
    /// [`TimetableError::InvalidInput`] for blank or duplicate activity
    /// codes and slots that do not end after they start. Activities that
    /// cannot be placed are not an error; they are listed in
    /// [`GeneratedSchedule::conflicts`].
    pub fn generate(&self, activities: &[Activity]) -> Result<GeneratedSchedule> {
        validate_input(activities).map_err(TimetableError::InvalidInput)?;

        let space = SearchSpace::new(activities);
        let algorithm = self.config.algorithm_for(activities.len());
        let (chosen, stats) = match algorithm {
            Algorithm::Backtracking => backtracking::search(&space, self.config.max_nodes),
            Algorithm::Greedy => greedy::first_fit(&space),
        };

        if stats.budget_exhausted {
            warn!(
                nodes = stats.nodes_visited,
                placed = chosen.len(),
                "backtracking node budget exhausted; returning best schedule found so far"
            );
        }

        let schedule: Vec<ScheduleSlot> = chosen
            .iter()
            .map(|&r| ScheduleSlot::from_slot(&activities[r.activity].activity_code, r.slot, space.slot(r)))
            .collect();
        let conflicts = conflict_messages(activities, &chosen, algorithm);
        let dependency_violations = space
            .dependencies()
            .any_declared()
            .then(|| dependency_violations(&space, &chosen));

        if let Some(violations) = dependency_violations.as_ref().filter(|v| !v.is_empty()) {
            warn!(count = violations.len(), "schedule leaves dependencies unmet");
        }

        info!(
            algorithm = %algorithm,
            total = activities.len(),
            scheduled = schedule.len(),
            nodes = stats.nodes_visited,
            "generated schedule"
        );

        Ok(GeneratedSchedule {
            scheduled_activities: schedule.len(),
            schedule,
            conflicts,
            total_activities: activities.len(),
            algorithm,
            generated_at: Utc::now(),
            dependency_violations,
            stats,
        })
    }
}

/// Generates a timetable with the default configuration.
pub fn generate(activities: &[Activity]) -> Result<GeneratedSchedule> {
    ScheduleGenerator::new().generate(activities)
}

/// One message per unplaced activity, in input order.
fn conflict_messages(activities: &[Activity], chosen: &[SlotRef], algorithm: Algorithm) -> Vec<String> {
    let placed: HashSet<usize> = chosen.iter().map(|r| r.activity).collect();
    activities
        .iter()
        .enumerate()
        .filter(|(i, _)| !placed.contains(i))
        .map(|(_, activity)| {
            let code = &activity.activity_code;
            if activity.available_slots.is_empty() {
                format!("Could not schedule {code} - no available time slots")
            } else {
                match algorithm {
                    Algorithm::Backtracking => format!("Could not schedule {code} in optimal solution"),
                    Algorithm::Greedy => format!(
                        "Could not schedule {code} - all time slots conflict with existing activities"
                    ),
                }
            }
        })
        .collect()
}

/// Re-checks every placed slot's direct dependencies against the result.
///
/// Dangling records never resolved to an edge, so they cannot appear here.
/// Does not alter the schedule.
fn dependency_violations(space: &SearchSpace<'_>, chosen: &[SlotRef]) -> Vec<String> {
    let placed: HashSet<SlotRef> = chosen.iter().copied().collect();
    let activities = space.activities();

    let mut violations = Vec::new();
    for &root in chosen {
        for &dependent in space.dependencies().dependents(root) {
            if !placed.contains(&dependent) {
                violations.push(format!(
                    "{} slot {} requires {} slot {}, which is not scheduled",
                    activities[root.activity].activity_code,
                    root.slot,
                    activities[dependent.activity].activity_code,
                    dependent.slot,
                ));
            }
        }
    }
    violations
}
