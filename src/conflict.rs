//! Conflict model: can two placements coexist?
//!
//! Two placements conflict iff they share at least one weekday AND their
//! time ranges overlap as half-open intervals:
//!
//! ```text
//! start_a < end_b && start_b < end_a
//! ```
//!
//! Touching endpoints (one ends at 10:00, the other starts at 10:00) do not
//! conflict. The predicate is symmetric, and a placement with at least one
//! day always conflicts with itself. A placement with no days conflicts with
//! nothing.

use crate::models::{ScheduleSlot, TimeOfDay, TimeSlot, Weekday};

/// Anything occupying a weekly time window.
pub trait Placement {
    /// Days the window repeats on.
    fn days(&self) -> &[Weekday];
    /// Start (inclusive).
    fn start(&self) -> TimeOfDay;
    /// End (exclusive).
    fn end(&self) -> TimeOfDay;
}

impl Placement for TimeSlot {
    fn days(&self) -> &[Weekday] {
        &self.days
    }

    fn start(&self) -> TimeOfDay {
        self.start_time
    }

    fn end(&self) -> TimeOfDay {
        self.end_time
    }
}

impl Placement for ScheduleSlot {
    fn days(&self) -> &[Weekday] {
        &self.days
    }

    fn start(&self) -> TimeOfDay {
        self.start_time
    }

    fn end(&self) -> TimeOfDay {
        self.end_time
    }
}

/// Whether two day sets intersect.
#[inline]
pub fn shares_day(a: &[Weekday], b: &[Weekday]) -> bool {
    a.iter().any(|d| b.contains(d))
}

/// Whether two half-open time ranges intersect.
#[inline]
pub fn times_overlap(start_a: TimeOfDay, end_a: TimeOfDay, start_b: TimeOfDay, end_b: TimeOfDay) -> bool {
    start_a < end_b && start_b < end_a
}

/// Whether two placements conflict.
///
/// # Example
/// ```
/// use u_timetable::conflict::overlaps;
/// use u_timetable::models::{TimeSlot, Weekday};
///
/// let a = TimeSlot::parse([Weekday::Monday], "9:00 AM", "10:00 AM").unwrap();
/// let b = TimeSlot::parse([Weekday::Monday], "9:30 AM", "10:30 AM").unwrap();
/// let c = TimeSlot::parse([Weekday::Monday], "10:00 AM", "11:00 AM").unwrap();
/// assert!(overlaps(&a, &b));
/// assert!(!overlaps(&a, &c));
/// ```
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Placement + ?Sized,
    B: Placement + ?Sized,
{
    shares_day(a.days(), b.days()) && times_overlap(a.start(), a.end(), b.start(), b.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn slot(days: &[Weekday], start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(days.iter().copied(), start, end).unwrap()
    }

    #[test]
    fn test_same_day_overlap() {
        let a = slot(&[Weekday::Monday], "9:00 AM", "10:00 AM");
        let b = slot(&[Weekday::Monday], "9:30 AM", "10:30 AM");
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_endpoints_do_not_conflict() {
        let a = slot(&[Weekday::Monday], "9:00 AM", "10:00 AM");
        let b = slot(&[Weekday::Monday], "10:00 AM", "11:00 AM");
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_disjoint_days() {
        let a = slot(&[Weekday::Monday, Weekday::Thursday], "9:00 AM", "10:00 AM");
        let b = slot(&[Weekday::Tuesday, Weekday::Friday], "9:00 AM", "10:00 AM");
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_one_shared_day_is_enough() {
        let a = slot(&[Weekday::Monday, Weekday::Thursday], "9:00 AM", "10:00 AM");
        let b = slot(&[Weekday::Thursday, Weekday::Saturday], "9:59 AM", "11:00 AM");
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_containment() {
        let outer = slot(&[Weekday::Wednesday], "8:00 AM", "5:00 PM");
        let inner = slot(&[Weekday::Wednesday], "12:00 PM", "12:30 PM");
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_self_conflict() {
        let a = slot(&[Weekday::Friday], "1:00 PM", "2:00 PM");
        assert!(overlaps(&a, &a.clone()));
    }

    #[test]
    fn test_empty_days_never_conflict() {
        let mut empty = slot(&[Weekday::Monday], "9:00 AM", "10:00 AM");
        empty.days.clear();
        let other = slot(&Weekday::ALL, "12:00 AM", "11:59 PM");
        assert!(!overlaps(&empty, &other));
        assert!(!overlaps(&empty, &empty));
    }

    #[test]
    fn test_mixed_placement_types() {
        let a = slot(&[Weekday::Monday], "9:00 AM", "10:00 AM");
        let placed = ScheduleSlot::from_slot("X", 0, &a);
        assert!(overlaps(&a, &placed));
        assert!(overlaps(&placed, &a));
    }

    #[test]
    fn test_symmetry_random() {
        let mut rng = SmallRng::seed_from_u64(7);
        let random_slot = |rng: &mut SmallRng| {
            let days: Vec<Weekday> = Weekday::ALL
                .into_iter()
                .filter(|_| rng.random_bool(0.3))
                .collect();
            let start = rng.random_range(7 * 60..18 * 60u16);
            let end = start + rng.random_range(1..=180u16);
            TimeSlot::new(
                days,
                TimeOfDay::from_minutes(start).unwrap(),
                TimeOfDay::from_minutes(end).unwrap(),
            )
            .unwrap()
        };

        for _ in 0..500 {
            let a = random_slot(&mut rng);
            let b = random_slot(&mut rng);
            assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
            if !a.days.is_empty() {
                assert!(overlaps(&a, &a));
            }
        }
    }
}
