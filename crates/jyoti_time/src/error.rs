//! Error types for calendar validation and time conversion.

/// Errors from calendar/clock validation or parsing.
///
/// Every variant names the offending field so callers can surface it
/// directly to a user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    /// Day does not exist in the given month.
    #[error("invalid day: {year:04}-{month:02} has no day {day}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Hour outside 0..=23.
    #[error("invalid hour: {hour} (expected 0-23)")]
    InvalidHour { hour: u32 },

    /// Minute outside 0..=59.
    #[error("invalid minute: {minute} (expected 0-59)")]
    InvalidMinute { minute: u32 },

    /// UTC offset non-finite or outside the civil range.
    #[error("invalid utc offset: {hours} h (expected -14 to +14)")]
    InvalidUtcOffset { hours: f64 },

    /// Text could not be parsed into the named field.
    #[error("malformed {field}: {input:?}")]
    Malformed { field: &'static str, input: String },
}

impl TimeError {
    /// Name of the input field that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidMonth { .. } => "month",
            Self::InvalidDay { .. } => "day",
            Self::InvalidHour { .. } => "hour",
            Self::InvalidMinute { .. } => "minute",
            Self::InvalidUtcOffset { .. } => "utc_offset_hours",
            Self::Malformed { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_day() {
        let e = TimeError::InvalidDay {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid day: 2023-02 has no day 29");
        assert_eq!(e.field(), "day");
    }

    #[test]
    fn malformed_reports_its_field() {
        let e = TimeError::Malformed {
            field: "date",
            input: "2024/01/01".to_string(),
        };
        assert_eq!(e.field(), "date");
        assert!(e.to_string().contains("2024/01/01"));
    }
}
