//! Civil time, Julian Day and Earth-orientation angles for chart casting.
//!
//! This crate provides:
//! - Validated civil date/time types and the local → Julian Day step
//! - Julian Day ↔ Gregorian calendar conversion
//! - Mean/true obliquity of the ecliptic
//! - Low-precision nutation and general precession
//! - Greenwich and local sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod sidereal;

pub use civil::{
    CivilDate, CivilTime, MAX_UTC_OFFSET_HOURS, UtDateTime, julian_day, validate_utc_offset,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, centuries_since_j2000,
    jd_to_calendar,
};
pub use nutation::{Nutation, fundamental_arguments, nutation_low_precision};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_arcsec, general_precession_deg};
pub use sidereal::{
    earth_rotation_angle_deg, equation_of_equinoxes_deg, gast_deg, gmst_deg,
    local_sidereal_time_deg,
};
