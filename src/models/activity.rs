//! Activity and dependency models.
//!
//! An activity is the unit being placed on the weekly timetable. It offers
//! an ordered list of candidate slots; the position of a slot in that list
//! is its identity, and dependencies refer to slots by position.
//!
//! # Dependencies
//! A [`Dependency`] reads "if `activity_code` is placed in `slot_index`,
//! then `dependent_activity_code` must be placed in `dependent_slot_index`".
//! Records live on the owning activity but together form a graph over
//! (activity, slot) pairs across the whole input. A record pointing at an
//! activity or slot that does not exist is inert.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Comparison key for an activity code: surrounding whitespace dropped,
/// lowercased char by char (Unicode case mapping).
pub fn code_key(code: &str) -> String {
    code.trim().chars().flat_map(char::to_lowercase).collect()
}

/// Whether two codes name the same activity. Agrees with [`code_key`].
pub fn same_code(a: &str, b: &str) -> bool {
    let a = a.trim().chars().flat_map(char::to_lowercase);
    let b = b.trim().chars().flat_map(char::to_lowercase);
    a.eq(b)
}

/// An activity to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier, unique case-insensitively within one input.
    pub activity_code: String,
    /// Candidate slots in preference order.
    pub available_slots: Vec<TimeSlot>,
    /// Slot-level co-placement requirements declared by this activity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

impl Activity {
    /// Creates an activity with no slots.
    pub fn new(activity_code: impl Into<String>) -> Self {
        Self {
            activity_code: activity_code.into(),
            available_slots: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Adds a candidate slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.available_slots.push(slot);
        self
    }

    /// Declares that choosing `slot_index` of this activity requires
    /// `dependent_slot_index` of `dependent_code`.
    pub fn with_dependency(
        mut self,
        slot_index: usize,
        dependent_code: impl Into<String>,
        dependent_slot_index: usize,
    ) -> Self {
        let dependency = Dependency::new(
            self.activity_code.clone(),
            slot_index,
            dependent_code,
            dependent_slot_index,
        );
        self.dependencies.push(dependency);
        self
    }

    /// Whether `code` names this activity (see [`same_code`]).
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        same_code(&self.activity_code, code)
    }

    /// Slot at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&TimeSlot> {
        self.available_slots.get(index)
    }

    /// Dependencies this activity declares for one of its slots.
    pub fn dependencies_for_slot(&self, slot_index: usize) -> impl Iterator<Item = &Dependency> {
        let code = self.activity_code.as_str();
        self.dependencies
            .iter()
            .filter(move |d| d.slot_index == slot_index && same_code(&d.activity_code, code))
    }
}

/// A directed slot-to-slot co-placement requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Activity whose slot triggers the requirement.
    pub activity_code: String,
    /// Triggering slot of `activity_code`.
    pub slot_index: usize,
    /// Activity that must be co-placed.
    pub dependent_activity_code: String,
    /// Slot `dependent_activity_code` must be placed in.
    pub dependent_slot_index: usize,
}

impl Dependency {
    /// Creates a dependency record.
    pub fn new(
        activity_code: impl Into<String>,
        slot_index: usize,
        dependent_activity_code: impl Into<String>,
        dependent_slot_index: usize,
    ) -> Self {
        Self {
            activity_code: activity_code.into(),
            slot_index,
            dependent_activity_code: dependent_activity_code.into(),
            dependent_slot_index,
        }
    }

    /// Whether two records describe the same edge (codes compared with [`same_code`]).
    pub fn same_edge(&self, other: &Dependency) -> bool {
        self.slot_index == other.slot_index
            && self.dependent_slot_index == other.dependent_slot_index
            && same_code(&self.activity_code, &other.activity_code)
            && same_code(&self.dependent_activity_code, &other.dependent_activity_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn slot(day: Weekday, start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse([day], start, end).unwrap()
    }

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("MATH101")
            .with_slot(slot(Weekday::Monday, "9:00 AM", "10:00 AM"))
            .with_slot(slot(Weekday::Tuesday, "9:00 AM", "10:00 AM"))
            .with_dependency(1, "LAB101", 0);

        assert_eq!(act.activity_code, "MATH101");
        assert_eq!(act.available_slots.len(), 2);
        assert_eq!(
            act.dependencies,
            vec![Dependency::new("MATH101", 1, "LAB101", 0)]
        );
        assert!(act.slot(1).is_some());
        assert!(act.slot(2).is_none());
    }

    #[test]
    fn test_has_code_ignores_case() {
        let act = Activity::new("Math101");
        assert!(act.has_code("MATH101"));
        assert!(act.has_code("math101"));
        assert!(!act.has_code("MATH102"));
    }

    #[test]
    fn test_code_matching_trims_and_folds_unicode_case() {
        assert!(same_code("LAB ", "lab"));
        assert!(same_code("ÉTÉ-1", "été-1"));
        assert!(!same_code("A", "B"));
        assert!(!same_code("AB", "A"));
        assert_eq!(code_key("  Ωmega "), "ωmega");
        assert_eq!(code_key("ÉTÉ"), code_key("été"));
        assert!(Activity::new("Ünit").has_code("ÜNIT"));
    }

    #[test]
    fn test_dependencies_for_slot() {
        let act = Activity::new("A")
            .with_dependency(0, "B", 0)
            .with_dependency(0, "C", 1)
            .with_dependency(1, "D", 0);

        let deps: Vec<_> = act.dependencies_for_slot(0).collect();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[1].dependent_activity_code, "C");
        assert_eq!(act.dependencies_for_slot(2).count(), 0);
    }

    #[test]
    fn test_same_edge() {
        let a = Dependency::new("A", 0, "b", 1);
        assert!(a.same_edge(&Dependency::new("a", 0, "B", 1)));
        assert!(!a.same_edge(&Dependency::new("A", 0, "B", 0)));
    }

    #[test]
    fn test_json_dependencies_optional() {
        let json = serde_json::json!({
            "activityCode": "PE",
            "availableSlots": [
                { "days": ["Saturday"], "startTime": "8:00 AM", "endTime": "9:00 AM" }
            ]
        });
        let act: Activity = serde_json::from_value(json).unwrap();
        assert!(act.dependencies.is_empty());

        let out = serde_json::to_value(&act).unwrap();
        assert!(out.get("dependencies").is_none());

        let with_dep = act.with_dependency(0, "SWIM", 2);
        let out = serde_json::to_value(&with_dep).unwrap();
        assert_eq!(out["dependencies"][0]["dependentActivityCode"], "SWIM");
        assert_eq!(out["dependencies"][0]["dependentSlotIndex"], 2);
    }
}
