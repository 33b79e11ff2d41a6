//! Exhaustive backtracking search.
//!
//! # Algorithm
//! Depth-first over activities in input order. At each activity:
//! 1. For each candidate slot (index ascending), take its closure and,
//!    if it fits the partial schedule, push it, recurse, then pop it.
//! 2. Then recurse with the activity skipped.
//!
//! An activity already placed by an earlier closure only takes the skip
//! branch. At the leaf the partial schedule replaces the best one only if
//! strictly larger, so the first maximal schedule found is kept.
//!
//! # Pruning
//! A branch is cut when it cannot strictly beat the best schedule: the
//! activities left to visit, plus earlier activities a later closure could
//! still pull in, bound what the branch can add.
//!
//! # Complexity
//! O((s + 1)^n) nodes for n activities with s slots each. A node budget
//! stops the search early and keeps the best schedule found so far,
//! counting the partial schedule at the point of exhaustion (the remaining
//! activities skipped).

use tracing::debug;

use super::space::{SearchSpace, SlotRef};
use crate::models::SearchStats;

/// Runs the search. Returns the chosen slots in placement order.
pub(crate) fn search(space: &SearchSpace<'_>, max_nodes: Option<u64>) -> (Vec<SlotRef>, SearchStats) {
    let mut search = Backtracker::new(space, max_nodes);
    search.visit(0);
    (search.best, search.stats)
}

struct Backtracker<'s, 'a> {
    space: &'s SearchSpace<'a>,
    max_nodes: Option<u64>,
    /// Current partial schedule (closures stacked in push order).
    partial: Vec<SlotRef>,
    /// `occupied[activity]`: activity present in `partial`.
    occupied: Vec<bool>,
    best: Vec<SlotRef>,
    stats: SearchStats,
    /// `pull_slack[i]`: activities before `i` that closures rooted at
    /// `i..` may pull in.
    pull_slack: Vec<usize>,
}

impl<'s, 'a> Backtracker<'s, 'a> {
    fn new(space: &'s SearchSpace<'a>, max_nodes: Option<u64>) -> Self {
        let n = space.len();
        Self {
            space,
            max_nodes,
            partial: Vec::with_capacity(n),
            occupied: vec![false; n],
            best: Vec::new(),
            stats: SearchStats::default(),
            pull_slack: pull_slack(space),
        }
    }

    fn visit(&mut self, index: usize) {
        if self.stats.budget_exhausted {
            return;
        }
        if self.max_nodes.is_some_and(|max| self.stats.nodes_visited >= max) {
            self.stats.budget_exhausted = true;
            // Skipping every remaining activity completes the partial schedule.
            self.keep_if_better();
            return;
        }
        self.stats.nodes_visited += 1;

        let n = self.space.len();
        if index == n {
            self.keep_if_better();
            return;
        }

        let reachable = (self.partial.len() + (n - index) + self.pull_slack[index]).min(n);
        if reachable <= self.best.len() {
            return;
        }

        let space = self.space;
        if !self.occupied[index] {
            for slot in 0..space.activities()[index].available_slots.len() {
                let Some(closure) = space.closure(SlotRef::new(index, slot)) else {
                    continue;
                };
                if !space.fits(closure, &self.partial, &self.occupied) {
                    continue;
                }

                self.push(closure);
                self.visit(index + 1);
                self.pop(closure);

                if self.stats.budget_exhausted {
                    return;
                }
            }
        }

        self.visit(index + 1);
    }

    fn keep_if_better(&mut self) {
        if self.partial.len() > self.best.len() {
            self.best.clone_from(&self.partial);
            debug!(
                placed = self.best.len(),
                nodes = self.stats.nodes_visited,
                "new best schedule"
            );
        }
    }

    fn push(&mut self, closure: &[SlotRef]) {
        for &member in closure {
            self.partial.push(member);
            self.occupied[member.activity] = true;
        }
    }

    fn pop(&mut self, closure: &[SlotRef]) {
        for &member in closure {
            self.occupied[member.activity] = false;
        }
        self.partial.truncate(self.partial.len() - closure.len());
    }
}

/// `pull_slack[i]` for every `i` in `0..=n`, in O(n + edges).
///
/// Activity `t` counts towards every `i` in `t + 1..=r`, where `r` is the
/// last activity with a slot that pulls `t` in.
fn pull_slack(space: &SearchSpace<'_>) -> Vec<usize> {
    let n = space.len();
    let mut last_root: Vec<Option<usize>> = vec![None; n];
    for (root, target) in space.dependencies().edges() {
        if target.activity < root.activity {
            let last = &mut last_root[target.activity];
            *last = Some(last.map_or(root.activity, |r| r.max(root.activity)));
        }
    }

    let mut delta = vec![0isize; n + 2];
    for (target, root) in last_root.iter().enumerate() {
        if let Some(root) = *root {
            delta[target + 1] += 1;
            delta[root + 1] -= 1;
        }
    }
    delta[..=n]
        .iter()
        .scan(0isize, |running, d| {
            *running += d;
            Some(running.unsigned_abs())
        })
        .collect()
}
