//! Whole-sign houses.
//!
//! The ascendant's sign is the 1st house, the next sign the 2nd, and so
//! on. Only the sign offset matters, never the degree within a sign.

use crate::rashi::{Rashi, sign_of};

/// House (1..=12) of a body in `planet_sign` for a chart whose ascendant
/// is in `ascendant_sign`. Both signs are 1-based.
///
/// `((planet − ascendant + 12) mod 12) + 1`
pub const fn house_of(planet_sign: u8, ascendant_sign: u8) -> u8 {
    ((planet_sign as i16 - ascendant_sign as i16).rem_euclid(12)) as u8 + 1
}

/// House of a body from sidereal longitudes.
pub fn house_of_longitude(planet_lon_deg: f64, ascendant_lon_deg: f64) -> u8 {
    house_of(sign_of(planet_lon_deg), sign_of(ascendant_lon_deg))
}

/// The rashi occupying each house, 1st house first.
pub fn house_signs(ascendant: Rashi) -> [Rashi; 12] {
    std::array::from_fn(|i| ascendant.offset(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_is_first_house() {
        for s in 1..=12 {
            assert_eq!(house_of(s, s), 1);
        }
    }

    #[test]
    fn sign_before_ascendant_is_twelfth() {
        assert_eq!(house_of(12, 1), 12);
        assert_eq!(house_of(3, 4), 12);
    }

    #[test]
    fn seventh_house_opposite() {
        assert_eq!(house_of(7, 1), 7);
        assert_eq!(house_of(1, 7), 7);
    }

    #[test]
    fn invariant_under_uniform_rotation() {
        for planet in 1..=12u8 {
            for asc in 1..=12u8 {
                let h = house_of(planet, asc);
                for k in 0..12u8 {
                    let rp = (planet - 1 + k) % 12 + 1;
                    let ra = (asc - 1 + k) % 12 + 1;
                    assert_eq!(house_of(rp, ra), h, "planet {planet} asc {asc} rot {k}");
                }
            }
        }
    }

    #[test]
    fn degree_within_sign_is_ignored() {
        assert_eq!(house_of_longitude(30.0, 59.9), 1);
        assert_eq!(house_of_longitude(29.9, 30.0), 12);
    }

    #[test]
    fn house_signs_start_at_lagna() {
        let hs = house_signs(Rashi::Simha);
        assert_eq!(hs[0], Rashi::Simha);
        assert_eq!(hs[6], Rashi::Kumbha);
        assert_eq!(hs[11], Rashi::Karka);
    }
}
