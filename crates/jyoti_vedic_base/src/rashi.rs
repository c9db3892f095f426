//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 degrees sidereal. Sign numbers exposed
//! to callers are 1-based (Mesha = 1, Meena = 12).

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::VedicError;
use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (index 0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 1-based sign number.
    pub fn from_number(sign: u8) -> Result<Self, VedicError> {
        if (1..=12).contains(&sign) {
            Ok(ALL_RASHIS[(sign - 1) as usize])
        } else {
            Err(VedicError::DomainComputation(format!(
                "sign {sign} is outside 1..=12"
            )))
        }
    }

    /// The sign `offset` places further on, wrapping after Meena.
    pub const fn offset(self, offset: u8) -> Self {
        ALL_RASHIS[((self.index() as u16 + offset as u16) % 12) as usize]
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Display for Dms {
    /// `DD°MM′SS″`, rounded to the nearest whole arcsecond.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total = (dms_to_deg(self) * 3600.0).round() as u64;
        write!(
            f,
            "{:02}°{:02}′{:02}″",
            total / 3600,
            (total / 60) % 60,
            total % 60
        )
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// 1-based sign number of a sidereal longitude: `floor(L/30) + 1`.
pub fn sign_of(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / RASHI_SPAN).floor() as u8).min(11) + 1
}

/// Degrees within the sign, in [0, 30).
pub fn degree_in_sign(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    lon - (sign_of(lon) - 1) as f64 * RASHI_SPAN
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 1-based sign number (1 = Mesha).
    pub sign: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let sign = sign_of(sidereal_lon_deg);
    let degrees_in_rashi = degree_in_sign(sidereal_lon_deg);
    RashiInfo {
        rashi: ALL_RASHIS[(sign - 1) as usize],
        sign,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_numbers_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
            assert_eq!(Rashi::from_number(r.number()).unwrap(), *r);
        }
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert!(Rashi::from_number(0).is_err());
        assert!(Rashi::from_number(13).is_err());
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Rashi::Meena.offset(1), Rashi::Mesha);
        assert_eq!(Rashi::Karka.offset(6), Rashi::Makara);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn dms_display_rounds_up_through_sixty() {
        let d = deg_to_dms(10.0 + 59.0 / 60.0 + 59.9999 / 3600.0);
        assert_eq!(d.to_string(), "11°00′00″");
    }

    #[test]
    fn boundaries_belong_to_the_next_sign() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            assert_eq!(sign_of(lon), i + 1, "boundary at {lon}");
            assert!(degree_in_sign(lon).abs() < 1e-10);
        }
    }

    #[test]
    fn exactly_180_is_tula_zero() {
        let info = rashi_from_longitude(180.0);
        assert_eq!(info.sign, 7);
        assert_eq!(info.rashi, Rashi::Tula);
        assert_eq!(info.degrees_in_rashi, 0.0);
    }

    #[test]
    fn wrap_and_negative() {
        assert_eq!(sign_of(365.0), 1);
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn just_below_360_is_meena() {
        let lon = 360.0 - 1e-12;
        assert_eq!(sign_of(lon), 12);
        let d = degree_in_sign(lon);
        assert!((0.0..30.0).contains(&d));
    }
}
