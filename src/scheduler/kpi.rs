//! Timetable quality metrics (KPIs).
//!
//! Summarizes a generated timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | Placed activities / total activities |
//! | Busy Minutes by Day | Sum of placed slot lengths occurring on each day |
//! | Total Busy Minutes | Sum over all days (a two-day slot counts twice) |
//! | Busiest Day | Day with the most busy minutes (earliest on ties) |

use std::collections::BTreeMap;

use crate::models::{GeneratedSchedule, Weekday};

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Fraction of activities placed (0.0..1.0). 1.0 for an empty input.
    pub placement_rate: f64,
    /// Occupied minutes per weekday; every weekday is present.
    pub busy_minutes_by_day: BTreeMap<Weekday, u32>,
    /// Occupied minutes across the week.
    pub total_busy_minutes: u32,
    /// Day with the most occupied minutes; `None` if nothing was placed.
    pub busiest_day: Option<Weekday>,
}

impl ScheduleKpi {
    /// Computes KPIs from a generated timetable.
    pub fn calculate(result: &GeneratedSchedule) -> Self {
        let placement_rate = if result.total_activities == 0 {
            1.0
        } else {
            result.scheduled_activities as f64 / result.total_activities as f64
        };

        let mut busy_minutes_by_day: BTreeMap<Weekday, u32> =
            Weekday::ALL.into_iter().map(|d| (d, 0)).collect();
        for placed in &result.schedule {
            for day in &placed.days {
                *busy_minutes_by_day.entry(*day).or_insert(0) += u32::from(placed.duration_minutes());
            }
        }

        let total_busy_minutes = busy_minutes_by_day.values().sum();

        let mut busiest_day = None;
        let mut busiest_minutes = 0;
        for (&day, &minutes) in &busy_minutes_by_day {
            if minutes > busiest_minutes {
                busiest_day = Some(day);
                busiest_minutes = minutes;
            }
        }

        Self {
            placement_rate,
            busy_minutes_by_day,
            total_busy_minutes,
            busiest_day,
        }
    }

    /// Occupied hours on a day.
    pub fn busy_hours(&self, day: Weekday) -> f64 {
        f64::from(self.busy_minutes_by_day.get(&day).copied().unwrap_or(0)) / 60.0
    }
}
