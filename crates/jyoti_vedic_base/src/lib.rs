//! Vedic chart calculations on top of an analytic ephemeris.
//!
//! This crate provides:
//! - Mean-element positions of the Sun, Moon and five visible planets
//! - Lunar nodes (mean or true) and daily motion / retrograde state
//! - Ayanamsha for six sidereal reference systems
//! - Lagna (ascendant) and MC from local sidereal time
//! - Rashi, nakshatra/pada, whole-sign houses and planetary dignity
//! - Vimshottari dasha through five levels
//!
//! Positions are accurate to a few arcminutes over several centuries
//! around J2000, which keeps sign and nakshatra boundaries reliable for
//! all but borderline placements.

pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod motion;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, tropical_to_sidereal};
pub use bhava::{house_of, house_of_longitude, house_signs};
pub use dasha::{
    BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, MahadashaGenerator,
    TimelineConfig, VIMSHOTTARI_CYCLE_YEARS, VimshottariTimeline, birth_balance,
    find_active_period, nakshatra_lord, sub_periods, vimshottari_years,
};
pub use dignity::{Dignity, debilitation_sign, dignity_in, exaltation_sign, own_signs};
pub use ephemeris::{
    Planet, PlanetLongitude, SunPosition, moon_longitude_deg, planet_longitude_deg,
    sidereal_longitude, sun_position, tropical_longitude_deg,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use lagna::{
    LagnaPoints, ObliquityMode, ascendant_longitude_deg, lagna_points, mc_longitude_deg,
};
pub use lunar_nodes::{NodeMode, ketu_from_rahu, mean_rahu_deg, rahu_deg, true_rahu_deg};
pub use motion::{Motion, is_retrograde, motion};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_of,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, degree_in_sign, dms_to_deg,
    rashi_from_longitude, sign_of,
};
pub use util::{normalize_360, signed_delta_deg};
