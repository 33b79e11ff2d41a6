//! Editable activity collection.
//!
//! An [`ActivitySet`] keeps activity codes unique (see [`same_code`]) and
//! keeps dependency records consistent as activities and slots are edited:
//! - removing an activity drops every dependency that targets it
//! - removing a slot drops dependencies rooted at or targeting that slot
//!   and renumbers the ones pointing past it
//! - renaming an activity rewrites the records that name it

use serde::{Deserialize, Serialize};

use super::{same_code, Activity, Dependency, GeneratedSchedule, TimeSlot};
use crate::error::{Result, TimetableError};
use crate::scheduler::{GeneratorConfig, ScheduleGenerator};
use crate::validation::validate_activity;

/// Ordered activities with case-insensitively unique codes.
///
/// Serializes as a plain JSON array of activities; deserializing applies
/// the same checks as [`ActivitySet::add_activity`].
///
/// # Example
/// ```
/// use u_timetable::models::{Activity, ActivitySet, TimeSlot, Weekday};
/// use u_timetable::scheduler::GeneratorConfig;
///
/// let mut set = ActivitySet::new();
/// set.add_activity(
///     Activity::new("LEC")
///         .with_slot(TimeSlot::parse([Weekday::Monday], "9:00 AM", "10:00 AM").unwrap()),
/// ).unwrap();
/// set.add_activity(
///     Activity::new("LAB")
///         .with_slot(TimeSlot::parse([Weekday::Tuesday], "1:00 PM", "3:00 PM").unwrap()),
/// ).unwrap();
/// set.add_dependency("LEC", 0, "LAB", 0).unwrap();
///
/// assert!(set.add_activity(Activity::new("lec")).is_err());
///
/// let result = set.generate(&GeneratorConfig::default()).unwrap();
/// assert_eq!(result.scheduled_activities, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Activity>", into = "Vec<Activity>")]
pub struct ActivitySet {
    activities: Vec<Activity>,
}

impl ActivitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Position of an activity (case-insensitive).
    pub fn position(&self, code: &str) -> Option<usize> {
        self.activities.iter().position(|a| a.has_code(code))
    }

    /// Looks up an activity (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.has_code(code))
    }

    /// Appends an activity.
    ///
    /// # Errors
    /// - [`TimetableError::InvalidInput`] for an ill-formed code, no slots,
    ///   or a slot that does not end after it starts
    /// - [`TimetableError::DuplicateActivity`] if the code is taken
    pub fn add_activity(&mut self, activity: Activity) -> Result<()> {
        validate_activity(&activity).map_err(TimetableError::InvalidInput)?;
        if self.position(&activity.activity_code).is_some() {
            return Err(TimetableError::DuplicateActivity(activity.activity_code));
        }
        self.activities.push(activity);
        Ok(())
    }

    /// Replaces the activity at `index`, keeping its position.
    ///
    /// If the code changes, dependency records naming the old code are
    /// rewritten to the new one.
    pub fn replace_activity(&mut self, index: usize, activity: Activity) -> Result<()> {
        let len = self.activities.len();
        if index >= len {
            return Err(TimetableError::ActivityIndexOutOfRange { index, len });
        }
        validate_activity(&activity).map_err(TimetableError::InvalidInput)?;
        if self
            .position(&activity.activity_code)
            .is_some_and(|existing| existing != index)
        {
            return Err(TimetableError::DuplicateActivity(activity.activity_code));
        }

        let old_code = std::mem::replace(&mut self.activities[index], activity).activity_code;
        let new_code = self.activities[index].activity_code.clone();
        if old_code != new_code {
            self.for_each_dependency(|dep| {
                if same_code(&dep.activity_code, &old_code) {
                    dep.activity_code = new_code.clone();
                }
                if same_code(&dep.dependent_activity_code, &old_code) {
                    dep.dependent_activity_code = new_code.clone();
                }
            });
        }
        Ok(())
    }

    /// Removes the activity at `index` and every dependency targeting it.
    pub fn remove_activity(&mut self, index: usize) -> Result<Activity> {
        let len = self.activities.len();
        if index >= len {
            return Err(TimetableError::ActivityIndexOutOfRange { index, len });
        }
        let removed = self.activities.remove(index);
        for activity in &mut self.activities {
            activity
                .dependencies
                .retain(|d| !same_code(&d.dependent_activity_code, &removed.activity_code));
        }
        Ok(removed)
    }

    /// Appends a candidate slot to an activity.
    pub fn add_time_slot(&mut self, code: &str, slot: TimeSlot) -> Result<()> {
        if !slot.has_valid_range() {
            return Err(TimetableError::InvalidTimeRange {
                start: slot.start_time.to_string(),
                end: slot.end_time.to_string(),
            });
        }
        self.activity_mut(code)?.available_slots.push(slot);
        Ok(())
    }

    /// Removes slot `index` of an activity.
    ///
    /// Dependencies rooted at or targeting the slot are dropped; those
    /// referring to later slots of the activity are renumbered.
    pub fn remove_time_slot(&mut self, code: &str, index: usize) -> Result<TimeSlot> {
        let activity = self.activity_mut(code)?;
        if index >= activity.available_slots.len() {
            return Err(TimetableError::SlotOutOfRange {
                code: activity.activity_code.clone(),
                index,
            });
        }
        let removed = activity.available_slots.remove(index);

        for activity in &mut self.activities {
            activity.dependencies.retain(|d| {
                let root_hit = d.slot_index == index && same_code(&d.activity_code, code);
                let target_hit = d.dependent_slot_index == index
                    && same_code(&d.dependent_activity_code, code);
                !root_hit && !target_hit
            });
        }
        self.for_each_dependency(|d| {
            if d.slot_index > index && same_code(&d.activity_code, code) {
                d.slot_index -= 1;
            }
            if d.dependent_slot_index > index && same_code(&d.dependent_activity_code, code) {
                d.dependent_slot_index -= 1;
            }
        });
        Ok(removed)
    }

    /// Declares that `code` in `slot_index` requires `dependent_code` in
    /// `dependent_slot_index`.
    ///
    /// The triggering slot must exist. The dependent side is not checked;
    /// a dangling requirement is inert during generation.
    pub fn add_dependency(
        &mut self,
        code: &str,
        slot_index: usize,
        dependent_code: &str,
        dependent_slot_index: usize,
    ) -> Result<()> {
        let activity = self.activity_mut(code)?;
        if slot_index >= activity.available_slots.len() {
            return Err(TimetableError::SlotOutOfRange {
                code: activity.activity_code.clone(),
                index: slot_index,
            });
        }

        let dependency = Dependency::new(
            activity.activity_code.clone(),
            slot_index,
            dependent_code,
            dependent_slot_index,
        );
        if activity.dependencies.iter().any(|d| d.same_edge(&dependency)) {
            return Err(TimetableError::DuplicateDependency {
                code: dependency.activity_code,
                slot_index,
                dependent_code: dependency.dependent_activity_code,
                dependent_slot_index,
            });
        }
        activity.dependencies.push(dependency);
        Ok(())
    }

    /// Removes the `n`-th dependency declared for a slot.
    pub fn remove_dependency(&mut self, code: &str, slot_index: usize, n: usize) -> Result<Dependency> {
        let activity = self.activity_mut(code)?;
        let position = activity
            .dependencies
            .iter()
            .enumerate()
            .filter(|(_, d)| d.slot_index == slot_index && same_code(&d.activity_code, code))
            .map(|(i, _)| i)
            .nth(n)
            .ok_or_else(|| TimetableError::DependencyOutOfRange {
                code: activity.activity_code.clone(),
                slot_index,
                index: n,
            })?;
        Ok(activity.dependencies.remove(position))
    }

    /// Dependencies declared for a slot; empty for unknown activities.
    pub fn dependencies_for_slot(&self, code: &str, slot_index: usize) -> Vec<&Dependency> {
        self.get(code)
            .map(|a| a.dependencies_for_slot(slot_index).collect())
            .unwrap_or_default()
    }

    /// Generates a timetable for the current activities.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<GeneratedSchedule> {
        ScheduleGenerator::new()
            .with_config(config.clone())
            .generate(&self.activities)
    }

    /// Consumes the set, returning the activities.
    pub fn into_inner(self) -> Vec<Activity> {
        self.activities
    }

    fn activity_mut(&mut self, code: &str) -> Result<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|a| a.has_code(code))
            .ok_or_else(|| TimetableError::UnknownActivity(code.to_string()))
    }

    fn for_each_dependency(&mut self, mut f: impl FnMut(&mut Dependency)) {
        for dep in self.activities.iter_mut().flat_map(|a| a.dependencies.iter_mut()) {
            f(dep);
        }
    }
}

impl TryFrom<Vec<Activity>> for ActivitySet {
    type Error = TimetableError;

    fn try_from(activities: Vec<Activity>) -> Result<Self> {
        let mut set = Self::new();
        for activity in activities {
            set.add_activity(activity)?;
        }
        Ok(set)
    }
}

impl From<ActivitySet> for Vec<Activity> {
    fn from(set: ActivitySet) -> Self {
        set.activities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn slot(day: Weekday, start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse([day], start, end).unwrap()
    }

    fn sample() -> ActivitySet {
        let mut set = ActivitySet::new();
        set.add_activity(
            Activity::new("A")
                .with_slot(slot(Weekday::Monday, "9:00 AM", "10:00 AM"))
                .with_slot(slot(Weekday::Tuesday, "9:00 AM", "10:00 AM"))
                .with_slot(slot(Weekday::Wednesday, "9:00 AM", "10:00 AM")),
        )
        .unwrap();
        set.add_activity(
            Activity::new("B")
                .with_slot(slot(Weekday::Monday, "1:00 PM", "2:00 PM"))
                .with_slot(slot(Weekday::Friday, "1:00 PM", "2:00 PM")),
        )
        .unwrap();
        set
    }

    #[test]
    fn test_add_rejects_duplicates_ignoring_case() {
        let mut set = sample();
        let err = set
            .add_activity(Activity::new("a").with_slot(slot(Weekday::Friday, "8:00 AM", "9:00 AM")))
            .unwrap_err();
        assert_eq!(err, TimetableError::DuplicateActivity("a".into()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_activity() {
        let mut set = ActivitySet::new();
        assert!(matches!(
            set.add_activity(Activity::new("NO SLOTS")),
            Err(TimetableError::InvalidInput(_))
        ));
        assert!(matches!(
            set.add_activity(Activity::new("bad/code").with_slot(slot(Weekday::Monday, "9:00 AM", "10:00 AM"))),
            Err(TimetableError::InvalidInput(_))
        ));
        assert!(set.is_empty());
    }

    #[test]
    fn test_lookup() {
        let set = sample();
        assert_eq!(set.position("b"), Some(1));
        assert_eq!(set.get("A").unwrap().available_slots.len(), 3);
        assert!(set.get("Z").is_none());
    }

    #[test]
    fn test_remove_activity_cascades() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 1).unwrap();
        set.add_dependency("A", 1, "GHOST", 0).unwrap();

        let removed = set.remove_activity(1).unwrap();
        assert_eq!(removed.activity_code, "B");
        let deps = &set.get("A").unwrap().dependencies;
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].dependent_activity_code, "GHOST");

        assert_eq!(
            set.remove_activity(5).unwrap_err(),
            TimetableError::ActivityIndexOutOfRange { index: 5, len: 1 }
        );
    }

    #[test]
    fn test_add_dependency_checks() {
        let mut set = sample();
        set.add_dependency("A", 2, "B", 0).unwrap();
        assert!(matches!(
            set.add_dependency("a", 2, "b", 0),
            Err(TimetableError::DuplicateDependency { .. })
        ));
        assert!(matches!(
            set.add_dependency("A", 3, "B", 0),
            Err(TimetableError::SlotOutOfRange { index: 3, .. })
        ));
        assert!(matches!(
            set.add_dependency("Z", 0, "B", 0),
            Err(TimetableError::UnknownActivity(_))
        ));
        // The dependent side may dangle.
        set.add_dependency("A", 2, "B", 9).unwrap();
        assert_eq!(set.dependencies_for_slot("A", 2).len(), 2);
    }

    #[test]
    fn test_remove_dependency() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 0).unwrap();
        set.add_dependency("A", 1, "B", 0).unwrap();
        set.add_dependency("A", 0, "B", 1).unwrap();

        let removed = set.remove_dependency("A", 0, 1).unwrap();
        assert_eq!(removed, Dependency::new("A", 0, "B", 1));
        assert_eq!(set.dependencies_for_slot("A", 0).len(), 1);
        assert_eq!(set.dependencies_for_slot("A", 1).len(), 1);
        assert!(matches!(
            set.remove_dependency("A", 0, 1),
            Err(TimetableError::DependencyOutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_time_slot_renumbers() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 1).unwrap();
        set.add_dependency("A", 1, "B", 0).unwrap();
        set.add_dependency("A", 2, "B", 1).unwrap();
        set.add_dependency("B", 0, "A", 2).unwrap();
        set.add_dependency("B", 1, "A", 1).unwrap();

        let removed = set.remove_time_slot("A", 1).unwrap();
        assert_eq!(removed.days, vec![Weekday::Tuesday]);

        let a = set.get("A").unwrap();
        assert_eq!(a.available_slots.len(), 2);
        assert_eq!(
            a.dependencies,
            vec![
                Dependency::new("A", 0, "B", 1),
                Dependency::new("A", 1, "B", 1),
            ]
        );
        assert_eq!(
            set.get("B").unwrap().dependencies,
            vec![Dependency::new("B", 0, "A", 1)]
        );
    }

    #[test]
    fn test_remove_time_slot_out_of_range() {
        let mut set = sample();
        assert!(matches!(
            set.remove_time_slot("B", 2),
            Err(TimetableError::SlotOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_add_time_slot() {
        let mut set = sample();
        set.add_time_slot("b", slot(Weekday::Saturday, "10:00 AM", "11:00 AM"))
            .unwrap();
        assert_eq!(set.get("B").unwrap().available_slots.len(), 3);

        let inverted = TimeSlot {
            days: vec![Weekday::Monday],
            start_time: crate::models::TimeOfDay::parse("3:00 PM").unwrap(),
            end_time: crate::models::TimeOfDay::parse("2:00 PM").unwrap(),
        };
        assert!(matches!(
            set.add_time_slot("B", inverted),
            Err(TimetableError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_replace_activity_renames_references() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 1).unwrap();
        set.add_dependency("B", 0, "A", 0).unwrap();

        let renamed = Activity {
            activity_code: "B2".into(),
            ..set.get("B").unwrap().clone()
        };
        set.replace_activity(1, renamed).unwrap();

        assert_eq!(set.get("A").unwrap().dependencies[0].dependent_activity_code, "B2");
        assert_eq!(set.get("B2").unwrap().dependencies[0].activity_code, "B2");
        assert!(set.get("B").is_none());

        let clash = Activity::new("a").with_slot(slot(Weekday::Monday, "9:00 AM", "10:00 AM"));
        assert!(matches!(
            set.replace_activity(1, clash),
            Err(TimetableError::DuplicateActivity(_))
        ));
        // Same code, different case, same position is fine.
        let same = Activity::new("b2").with_slot(slot(Weekday::Monday, "9:00 AM", "10:00 AM"));
        set.replace_activity(1, same).unwrap();
    }

    #[test]
    fn test_generate_respects_dependencies() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 1).unwrap();
        let result = set.generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(result.scheduled_activities, 2);
        assert_eq!(result.slot_for_activity("B").unwrap().slot_index, 1);
        assert_eq!(result.dependency_violations, Some(Vec::new()));
    }

    #[test]
    fn test_json_array_round_trip() {
        let mut set = sample();
        set.add_dependency("A", 0, "B", 1).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["activityCode"], "A");

        let back: ActivitySet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);

        let dupes = serde_json::json!([
            { "activityCode": "X", "availableSlots": [{ "days": ["Monday"], "startTime": "9:00 AM", "endTime": "10:00 AM" }] },
            { "activityCode": "x", "availableSlots": [{ "days": ["Monday"], "startTime": "9:00 AM", "endTime": "10:00 AM" }] }
        ]);
        assert!(serde_json::from_value::<ActivitySet>(dupes).is_err());
    }
}
