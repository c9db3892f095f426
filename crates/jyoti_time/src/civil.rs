//! Validated civil date / wall-clock types and the local → Julian Day step.
//!
//! A `CivilDate` or `CivilTime` can only be built through a checking
//! constructor, so downstream code never re-validates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

/// Widest civil UTC offset in use (Line Islands, +14:00).
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting months outside 1..=12 and days the month
    /// does not have.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let max_day = days_in_month(year, month).ok_or(TimeError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (a leading `-` on the year is allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed {
            field: "date",
            input: s.to_string(),
        };
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }
        let year: i32 = parts[0].parse().map_err(|_| malformed())?;
        let month: u32 = parts[1].parse().map_err(|_| malformed())?;
        let day: u32 = parts[2].parse().map_err(|_| malformed())?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time of day at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CivilTime {
    hour: u32,
    minute: u32,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute { minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Hours since midnight as a real number.
    pub fn fractional_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `hh:mm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed {
            field: "time",
            input: s.to_string(),
        };
        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        let hour: u32 = h.parse().map_err(|_| malformed())?;
        let minute: u32 = m.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Check a numeric UTC offset (hours east of Greenwich).
pub fn validate_utc_offset(hours: f64) -> Result<f64, TimeError> {
    if hours.is_finite() && hours.abs() <= MAX_UTC_OFFSET_HOURS {
        Ok(hours)
    } else {
        Err(TimeError::InvalidUtcOffset { hours })
    }
}

/// Julian Day (UT) of a local civil date/time at a fixed UTC offset.
///
/// The offset is removed from the clock hour before the day fraction is
/// formed, so a local time that is "yesterday" or "tomorrow" in UT falls
/// on the right calendar day.
pub fn julian_day(date: CivilDate, time: CivilTime, utc_offset_hours: f64) -> f64 {
    let ut_hours = time.fractional_hours() - utc_offset_hours;
    calendar_to_jd(date.year, date.month, date.day as f64 + ut_hours / 24.0)
}

/// A UT calendar instant recovered from a Julian Day, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtDateTime {
    pub fn from_jd(jd: f64) -> Self {
        // Snap to whole seconds so 11:59:59.9999 prints as 12:00.
        let jd = (jd * SECONDS_PER_DAY).round() / SECONDS_PER_DAY;
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for UtDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02} UT",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
