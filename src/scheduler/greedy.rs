//! Single-pass first-fit placement.
//!
//! # Algorithm
//! 1. Visit activities in input order.
//! 2. Skip an activity a dependency already placed.
//! 3. Take the first slot (index ascending) whose closure fits everything
//!    accepted so far; otherwise leave the activity out.
//!
//! Closures and rejection rules are the same as in backtracking, so the
//! two strategies agree on what a valid placement is. The result is
//! approximate: nothing is revisited, so an early choice can strand later
//! activities.
//!
//! # Complexity
//! O(n * s * p) where n = activities, s = slots per activity,
//! p = placements accepted so far.

use super::space::{SearchSpace, SlotRef};
use crate::models::SearchStats;

/// Runs first fit. Returns the chosen slots in placement order.
pub(crate) fn first_fit(space: &SearchSpace<'_>) -> (Vec<SlotRef>, SearchStats) {
    let n = space.len();
    let mut placed: Vec<SlotRef> = Vec::with_capacity(n);
    let mut occupied = vec![false; n];
    let mut stats = SearchStats::default();

    for (index, activity) in space.activities().iter().enumerate() {
        stats.nodes_visited += 1;
        if occupied[index] {
            continue;
        }

        let accepted = (0..activity.available_slots.len())
            .filter_map(|slot| space.closure(SlotRef::new(index, slot)))
            .find(|closure| space.fits(closure, &placed, &occupied));

        if let Some(closure) = accepted {
            for &member in closure {
                placed.push(member);
                occupied[member.activity] = true;
            }
        }
    }

    (placed, stats)
}
