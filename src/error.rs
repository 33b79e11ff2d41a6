//! Error types.
//!
//! Only contract violations surface as errors. An activity that cannot be
//! placed is a normal outcome and is reported through
//! [`GeneratedSchedule::conflicts`](crate::models::GeneratedSchedule).

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors raised for malformed input or invalid edits.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimetableError {
    #[error("Invalid time '{0}': expected h:mm AM/PM")]
    InvalidTime(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("End time {end} must be after start time {start}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Activity code already exists: {0}")]
    DuplicateActivity(String),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Activity index {index} out of range (len {len})")]
    ActivityIndexOutOfRange { index: usize, len: usize },

    #[error("Activity '{code}' has no slot {index}")]
    SlotOutOfRange { code: String, index: usize },

    #[error("Dependency {code} slot {slot_index} -> {dependent_code} slot {dependent_slot_index} already exists")]
    DuplicateDependency {
        code: String,
        slot_index: usize,
        dependent_code: String,
        dependent_slot_index: usize,
    },

    #[error("Activity '{code}' slot {slot_index} has no dependency {index}")]
    DependencyOutOfRange {
        code: String,
        slot_index: usize,
        index: usize,
    },

    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
