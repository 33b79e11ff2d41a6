//! Input validation for timetable generation.
//!
//! Checks structural integrity of an activity list before it reaches the
//! search. Detects:
//! - Empty activity codes
//! - Duplicate activity codes (case-insensitive)
//! - Slots whose end is not after their start
//!
//! Dangling dependency references and slots without days are deliberately
//! NOT errors: the search treats them as inert.
//!
//! [`validate_activity`] adds the stricter rules applied when an activity
//! is added to an [`ActivitySet`](crate::models::ActivitySet).

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{code_key, Activity};

/// Longest accepted activity code, in characters.
pub const MAX_CODE_LEN: usize = 20;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share a code (ignoring case).
    DuplicateId,
    /// An activity code is blank.
    EmptyCode,
    /// An activity code is too long or has disallowed characters.
    InvalidCode,
    /// A slot ends at or before its start.
    InvalidTimeRange,
    /// An activity offers no slots.
    NoTimeSlots,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an activity list for generation.
///
/// Checks:
/// 1. Every activity code is non-blank
/// 2. No two codes share a [`code_key`](crate::models::code_key)
/// 3. Every slot ends strictly after it starts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(activities: &[Activity]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for activity in activities {
        let code = activity.activity_code.trim();
        if code.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                "Activity code is required",
            ));
        } else if !seen.insert(code_key(code)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity code: {}", activity.activity_code),
            ));
        }

        check_slot_ranges(activity, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single activity for entry into an activity set.
///
/// On top of the slot range check, requires a well-formed code
/// (see [`is_valid_code`]) and at least one slot.
pub fn validate_activity(activity: &Activity) -> ValidationResult {
    let mut errors = Vec::new();

    let code = activity.activity_code.as_str();
    if code.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCode,
            "Activity code is required",
        ));
    } else if !is_valid_code(code) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCode,
            format!(
                "Activity code '{code}' must be at most {MAX_CODE_LEN} letters, numbers, spaces, hyphens, or underscores"
            ),
        ));
    }

    if activity.available_slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTimeSlots,
            format!("Activity '{code}' has no available time slots"),
        ));
    }

    check_slot_ranges(activity, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether a code is 1..=20 ASCII letters, digits, spaces, hyphens, or underscores.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.chars().count() <= MAX_CODE_LEN
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
}

fn check_slot_ranges(activity: &Activity, errors: &mut Vec<ValidationError>) {
    for (index, slot) in activity.available_slots.iter().enumerate() {
        if !slot.has_valid_range() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Activity '{}' slot {index}: end time {} must be after start time {}",
                    activity.activity_code, slot.end_time, slot.start_time
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeOfDay, TimeSlot, Weekday};

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse([Weekday::Monday], start, end).unwrap()
    }

    fn inverted_slot() -> TimeSlot {
        TimeSlot {
            days: vec![Weekday::Monday],
            start_time: TimeOfDay::parse("11:00 AM").unwrap(),
            end_time: TimeOfDay::parse("10:00 AM").unwrap(),
        }
    }

    #[test]
    fn test_valid_input() {
        let activities = vec![
            Activity::new("A").with_slot(slot("9:00 AM", "10:00 AM")),
            Activity::new("B").with_dependency(3, "NOPE", 9),
        ];
        assert!(validate_input(&activities).is_ok());
    }

    #[test]
    fn test_duplicate_code_ignores_case() {
        let activities = vec![Activity::new("Math"), Activity::new("MATH")];
        let errors = validate_input(&activities).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("MATH"));
    }

    #[test]
    fn test_duplicate_code_unicode_case_and_padding() {
        let activities = vec![Activity::new("Ünit"), Activity::new("ÜNIT "), Activity::new("été")];
        let errors = validate_input(&activities).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_empty_code() {
        let errors = validate_input(&[Activity::new("  ")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCode);
    }

    #[test]
    fn test_inverted_range() {
        let activities = vec![Activity::new("A").with_slot(inverted_slot())];
        let errors = validate_input(&activities).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidTimeRange);
        assert!(errors[0].message.contains("slot 0"));
    }

    #[test]
    fn test_multiple_errors() {
        let activities = vec![
            Activity::new("A").with_slot(inverted_slot()),
            Activity::new("a"),
            Activity::new(""),
        ];
        let errors = validate_input(&activities).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_empty_day_slot_is_not_an_error() {
        let mut s = slot("9:00 AM", "10:00 AM");
        s.days.clear();
        assert!(validate_input(&[Activity::new("A").with_slot(s)]).is_ok());
    }

    #[test]
    fn test_code_format() {
        assert!(is_valid_code("CS 101-A_lab"));
        assert!(is_valid_code("12345678901234567890"));
        assert!(!is_valid_code("123456789012345678901"));
        assert!(!is_valid_code("CS.101"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn test_validate_activity() {
        let ok = Activity::new("CS101").with_slot(slot("9:00 AM", "10:00 AM"));
        assert!(validate_activity(&ok).is_ok());

        let errors = validate_activity(&Activity::new("CS#101")).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::InvalidCode, ValidationErrorKind::NoTimeSlots]
        );
    }
}
