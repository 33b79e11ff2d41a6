//! Weekdays and wall-clock times.
//!
//! # Time Model
//! A [`TimeOfDay`] is a wall-clock offset from midnight with minute
//! resolution. There is no date or timezone: two values are only ever
//! compared against each other on the same weekday.
//!
//! Times cross the JSON boundary in 12-hour form ("9:00 AM", "2:30 PM").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Minutes in a day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A schedulable weekday (Monday through Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All schedulable days in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimetableError::UnknownWeekday(s.to_string()))
    }
}

/// A named group of days offered as a shortcut when entering slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPreset {
    pub label: &'static str,
    pub days: &'static [Weekday],
}

/// Built-in day presets: Monday/Thursday and Tuesday/Friday.
pub const DAY_PRESETS: [DayPreset; 2] = [
    DayPreset {
        label: "MTH",
        days: &[Weekday::Monday, Weekday::Thursday],
    },
    DayPreset {
        label: "TF",
        days: &[Weekday::Tuesday, Weekday::Friday],
    },
];

/// A wall-clock time of day with minute resolution.
///
/// Ordered by offset from midnight, so `<` means "earlier in the day".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    ///
    /// Returns `None` for values of a full day or more.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Creates a time from a 24-hour clock reading.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Parses a 12-hour "h:mm AM/PM" string.
    ///
    /// "12:xx AM" is just after midnight and "12:xx PM" just after noon.
    /// The meridiem is case-insensitive and the space before it optional.
    ///
    /// # Example
    /// ```
    /// use u_timetable::models::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("2:30 PM").unwrap();
    /// assert_eq!(t.minutes(), 14 * 60 + 30);
    /// assert_eq!(TimeOfDay::parse("12:15 AM").unwrap().minutes(), 15);
    /// assert!(TimeOfDay::parse("14:30").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || TimetableError::InvalidTime(s.to_string());

        let trimmed = s.trim();
        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(invalid());
        }
        let (clock, meridiem) = trimmed.split_at(trimmed.len() - 2);
        let pm = if meridiem.eq_ignore_ascii_case("AM") {
            false
        } else if meridiem.eq_ignore_ascii_case("PM") {
            true
        } else {
            return Err(invalid());
        };

        let (hours, minutes) = clock.trim_end().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(hours, 2) || minutes.len() != 2 || !digits(minutes, 2) {
            return Err(invalid());
        }

        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&hours) || minutes >= 60 {
            return Err(invalid());
        }

        let hours = match (hours, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Ok(Self {
            minutes: hours * 60 + minutes,
        })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    /// Decimal hours since midnight ("2:30 PM" is 14.5).
    #[inline]
    pub fn to_decimal_hours(self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    /// The half-hour choices from 7:00 AM through 7:00 PM.
    pub fn options() -> Vec<TimeOfDay> {
        (7 * 60..=19 * 60)
            .step_by(30)
            .map(|minutes| Self { minutes })
            .collect()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.minutes / 60;
        let minute = self.minutes % 60;
        let (hour12, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        write!(f, "{hour12}:{minute:02} {meridiem}")
    }
}

impl FromStr for TimeOfDay {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Converts a 12-hour time string to decimal hours since midnight.
///
/// Fails on anything that is not "h:mm AM/PM".
pub fn time_to_decimal(time: &str) -> Result<f64> {
    TimeOfDay::parse(time).map(TimeOfDay::to_decimal_hours)
}
