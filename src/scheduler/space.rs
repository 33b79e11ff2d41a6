//! Search space shared by both strategies.
//!
//! Resolves dependency records into an index over (activity, slot) pairs
//! and precomputes, for every candidate slot, its mandatory closure: the
//! slot itself plus the slots its dependencies directly require.
//!
//! # Closure Rules
//! - Only directly declared dependents are pulled in. Dependencies of a
//!   dependent are not followed.
//! - A record naming an unknown activity, or a slot index the activity
//!   does not have, contributes nothing.
//! - A closure is unusable (never placed) if two members belong to the
//!   same activity, two members conflict with each other, or any member
//!   has no days.

use std::collections::HashMap;

use crate::conflict::overlaps;
use crate::models::{code_key, Activity, TimeSlot};

/// A slot of an activity, by position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotRef {
    pub activity: usize,
    pub slot: usize,
}

impl SlotRef {
    pub fn new(activity: usize, slot: usize) -> Self {
        Self { activity, slot }
    }
}

/// Resolved dependency edges between slots.
#[derive(Debug, Default)]
pub(crate) struct DependencyIndex {
    edges: HashMap<SlotRef, Vec<SlotRef>>,
    declared: bool,
}

impl DependencyIndex {
    /// Resolves every dependency record in the input.
    ///
    /// Codes are matched by [`code_key`]. Edges keep declaration order
    /// and repeated edges are collapsed.
    pub fn build(activities: &[Activity]) -> Self {
        let positions: HashMap<String, usize> = activities
            .iter()
            .enumerate()
            .map(|(i, a)| (code_key(&a.activity_code), i))
            .collect();
        let resolve = |code: &str, slot: usize| {
            positions
                .get(&code_key(code))
                .copied()
                .filter(|&i| slot < activities[i].available_slots.len())
                .map(|i| SlotRef::new(i, slot))
        };

        let mut index = Self::default();
        for dep in activities.iter().flat_map(|a| a.dependencies.iter()) {
            index.declared = true;
            let (Some(root), Some(target)) = (
                resolve(&dep.activity_code, dep.slot_index),
                resolve(&dep.dependent_activity_code, dep.dependent_slot_index),
            ) else {
                continue;
            };
            if root == target {
                continue;
            }
            let dependents = index.edges.entry(root).or_default();
            if !dependents.contains(&target) {
                dependents.push(target);
            }
        }
        index
    }

    /// Slots directly required by `root`.
    pub fn dependents(&self, root: SlotRef) -> &[SlotRef] {
        self.edges.get(&root).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the input declared any dependency record, resolvable or not.
    pub fn any_declared(&self) -> bool {
        self.declared
    }

    /// All resolved edges as (root, dependent) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (SlotRef, SlotRef)> + '_ {
        self.edges
            .iter()
            .flat_map(|(&root, targets)| targets.iter().map(move |&t| (root, t)))
    }
}

/// Activities plus everything derived from them once per run.
pub(crate) struct SearchSpace<'a> {
    activities: &'a [Activity],
    dependencies: DependencyIndex,
    /// `closures[activity][slot]`: `None` when the closure is unusable.
    closures: Vec<Vec<Option<Vec<SlotRef>>>>,
}

impl<'a> SearchSpace<'a> {
    pub fn new(activities: &'a [Activity]) -> Self {
        let dependencies = DependencyIndex::build(activities);
        let closures = activities
            .iter()
            .enumerate()
            .map(|(a, activity)| {
                (0..activity.available_slots.len())
                    .map(|s| Self::build_closure(activities, &dependencies, SlotRef::new(a, s)))
                    .collect()
            })
            .collect();
        Self {
            activities,
            dependencies,
            closures,
        }
    }

    fn build_closure(
        activities: &[Activity],
        dependencies: &DependencyIndex,
        root: SlotRef,
    ) -> Option<Vec<SlotRef>> {
        let slot_of = |r: SlotRef| &activities[r.activity].available_slots[r.slot];

        let mut closure = Vec::with_capacity(1 + dependencies.dependents(root).len());
        closure.push(root);
        closure.extend_from_slice(dependencies.dependents(root));

        for (i, &member) in closure.iter().enumerate() {
            if slot_of(member).days.is_empty() {
                return None;
            }
            for &other in &closure[..i] {
                if other.activity == member.activity || overlaps(slot_of(other), slot_of(member)) {
                    return None;
                }
            }
        }
        Some(closure)
    }

    pub fn activities(&self) -> &'a [Activity] {
        self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn dependencies(&self) -> &DependencyIndex {
        &self.dependencies
    }

    pub fn slot(&self, r: SlotRef) -> &'a TimeSlot {
        &self.activities[r.activity].available_slots[r.slot]
    }

    /// Closure of a candidate slot, or `None` if it can never be placed.
    pub fn closure(&self, root: SlotRef) -> Option<&[SlotRef]> {
        self.closures[root.activity][root.slot].as_deref()
    }

    /// Whether a closure can join a partial schedule.
    ///
    /// Rejected when any member's activity is already placed (which also
    /// covers an identical (activity, slot) pair) or any member conflicts
    /// with a placed slot.
    pub fn fits(&self, closure: &[SlotRef], placed: &[SlotRef], occupied: &[bool]) -> bool {
        closure.iter().all(|&member| {
            !occupied[member.activity]
                && placed
                    .iter()
                    .all(|&p| !overlaps(self.slot(p), self.slot(member)))
        })
    }
}
