//! Validated birth data.

use serde::Serialize;

use jyoti_time::{CivilDate, CivilTime, julian_day, validate_utc_offset};

use crate::error::JyotiError;

/// Date, clock time and place of birth.
///
/// Only constructible through [`BirthInput::new`] or [`BirthInput::parse`],
/// so every instance holds in-range values and chart code never checks
/// them again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    date: CivilDate,
    time: CivilTime,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
}

impl BirthInput {
    /// Validate coordinates and offset. Longitude is positive east.
    pub fn new(
        date: CivilDate,
        time: CivilTime,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, JyotiError> {
        if !(latitude_deg.is_finite() && (-90.0..=90.0).contains(&latitude_deg)) {
            return Err(JyotiError::invalid(
                "latitude",
                format!("{latitude_deg} is outside -90..=90"),
            ));
        }
        if !(longitude_deg.is_finite() && (-180.0..=180.0).contains(&longitude_deg)) {
            return Err(JyotiError::invalid(
                "longitude",
                format!("{longitude_deg} is outside -180..=180"),
            ));
        }
        let utc_offset_hours = validate_utc_offset(utc_offset_hours)?;
        Ok(Self {
            date,
            time,
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        })
    }

    /// Build from `YYYY-MM-DD` and `hh:mm` text.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, JyotiError> {
        Self::new(
            date.parse()?,
            time.parse()?,
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        )
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn time(&self) -> CivilTime {
        self.time
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Julian Day (UT) of the birth instant.
    pub fn julian_day(&self) -> f64 {
        julian_day(self.date, self.time, self.utc_offset_hours)
    }
}
