//! Candidate time slot model.

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};
use crate::error::{Result, TimetableError};

/// One candidate weekly time window for an activity.
///
/// The window repeats on every listed day, over the half-open interval
/// `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Days the window repeats on.
    pub days: Vec<Weekday>,
    /// Start of the window (inclusive).
    pub start_time: TimeOfDay,
    /// End of the window (exclusive).
    pub end_time: TimeOfDay,
}

impl TimeSlot {
    /// Creates a slot, collapsing repeated days into week order.
    ///
    /// Fails if `end` is not strictly after `start`.
    pub fn new(days: impl IntoIterator<Item = Weekday>, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if end <= start {
            return Err(TimetableError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();
        Ok(Self {
            days,
            start_time: start,
            end_time: end,
        })
    }

    /// Creates a slot from 12-hour time strings.
    ///
    /// # Example
    /// ```
    /// use u_timetable::models::{TimeSlot, Weekday};
    ///
    /// let slot = TimeSlot::parse([Weekday::Monday, Weekday::Thursday], "9:00 AM", "10:30 AM").unwrap();
    /// assert_eq!(slot.duration_minutes(), 90);
    /// assert!(TimeSlot::parse([Weekday::Monday], "10:00 AM", "9:00 AM").is_err());
    /// ```
    pub fn parse(days: impl IntoIterator<Item = Weekday>, start: &str, end: &str) -> Result<Self> {
        Self::new(days, TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    /// Length of one occurrence in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }

    /// Whether the slot repeats on the given day.
    #[inline]
    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the end is strictly after the start.
    #[inline]
    pub fn has_valid_range(&self) -> bool {
        self.end_time > self.start_time
    }
}
