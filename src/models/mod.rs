//! Timetable domain models.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Clinic | Sports Club |
//! |-------------|------------|--------|-------------|
//! | Activity | Course section | Therapy series | Training group |
//! | TimeSlot | Lecture meeting pattern | Appointment block | Court booking |
//! | Dependency | Lecture requires lab | Session requires follow-up | Drill requires gym time |
//! | GeneratedSchedule | Weekly timetable | Weekly roster | Weekly plan |

mod activity;
mod activity_set;
mod schedule;
mod slot;
mod time;

pub use activity::{code_key, same_code, Activity, Dependency};
pub use activity_set::ActivitySet;
pub use schedule::{Algorithm, GeneratedSchedule, ScheduleSlot, SearchStats};
pub use slot::TimeSlot;
pub use time::{time_to_decimal, DayPreset, TimeOfDay, Weekday, DAY_PRESETS};
