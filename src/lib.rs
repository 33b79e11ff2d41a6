//! Weekly timetable generation.
//!
//! Given activities that each offer several candidate weekly time slots,
//! picks at most one slot per activity so that no two placed slots overlap
//! and as many activities as possible are placed. A slot may require other
//! activities to be placed in specific slots; such a slot is placed together
//! with its requirements or not at all.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Activity`, `TimeSlot`, `Dependency`,
//!   `ActivitySet`, `GeneratedSchedule`, `TimeOfDay`, `Weekday`
//! - **`conflict`**: The overlap predicate shared by every strategy
//! - **`scheduler`**: Backtracking and greedy generation, `ScheduleKpi`
//! - **`validation`**: Input integrity checks (blank and duplicate codes,
//!   inverted time ranges)
//! - **`error`**: `TimetableError` and the crate `Result` alias
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Activity, TimeSlot, Weekday};
//!
//! let activities = vec![
//!     Activity::new("CS101")
//!         .with_slot(TimeSlot::parse([Weekday::Monday, Weekday::Thursday], "9:00 AM", "10:30 AM").unwrap()),
//!     Activity::new("MATH20")
//!         .with_slot(TimeSlot::parse([Weekday::Monday], "10:00 AM", "11:00 AM").unwrap())
//!         .with_slot(TimeSlot::parse([Weekday::Tuesday], "10:00 AM", "11:00 AM").unwrap()),
//! ];
//!
//! let result = u_timetable::generate(&activities).unwrap();
//! assert_eq!(result.scheduled_activities, 2);
//! assert_eq!(result.slot_for_activity("MATH20").unwrap().slot_index, 1);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; installing a subscriber is up to the caller.

pub mod conflict;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
pub use scheduler::{generate, GeneratorConfig, ScheduleGenerator};
