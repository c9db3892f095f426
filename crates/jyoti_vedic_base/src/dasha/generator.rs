//! Pull-based mahadasha generator.
//!
//! Yields mahadashas one at a time from birth onwards: the birth balance
//! first, then full periods in dasha order. Each period starts exactly
//! where the previous one ended. The iterator never ends on its own;
//! callers bound it with `take` or a horizon.

use super::balance::BirthBalance;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
use super::vimshottari::{next_lord, vimshottari_years};
use crate::graha::Graha;

/// Lazily produces consecutive mahadashas.
#[derive(Debug, Clone)]
pub struct MahadashaGenerator {
    cursor_jd: f64,
    lord: Graha,
    order: u32,
    first_years: Option<f64>,
}

impl MahadashaGenerator {
    pub fn new(birth_jd: f64, balance: &BirthBalance) -> Self {
        Self {
            cursor_jd: birth_jd,
            lord: balance.lord,
            order: 0,
            first_years: Some(balance.balance_years),
        }
    }

    /// Start of the next period to be produced.
    pub fn cursor_jd(&self) -> f64 {
        self.cursor_jd
    }
}

impl Iterator for MahadashaGenerator {
    type Item = DashaPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        let lord = self.lord;
        let years = self.first_years.take().unwrap_or(vimshottari_years(lord));
        let start_jd = self.cursor_jd;
        let end_jd = start_jd + years * DAYS_PER_YEAR;
        self.order += 1;

        self.cursor_jd = end_jd;
        self.lord = next_lord(lord);

        Some(DashaPeriod {
            lord,
            start_jd,
            end_jd,
            level: DashaLevel::Mahadasha,
            order: self.order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::balance::birth_balance;

    #[test]
    fn first_period_is_the_balance() {
        let b = birth_balance(100.0).unwrap();
        let mut g = MahadashaGenerator::new(2_451_545.0, &b);
        let first = g.next().unwrap();
        assert_eq!(first.lord, b.lord);
        assert_eq!(first.start_jd, 2_451_545.0);
        assert!((first.duration_years() - b.balance_years).abs() < 1e-9);
        assert_eq!(first.order, 1);
    }

    #[test]
    fn subsequent_periods_are_full_and_contiguous() {
        let b = birth_balance(100.0).unwrap();
        let periods: Vec<_> = MahadashaGenerator::new(2_451_545.0, &b).take(27).collect();
        for w in periods.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
            assert_eq!(w[1].lord, next_lord(w[0].lord));
        }
        for p in &periods[1..] {
            assert!((p.duration_years() - vimshottari_years(p.lord)).abs() < 1e-9);
        }
    }

    #[test]
    fn cycle_after_zero_fraction_is_exactly_120_years() {
        let b = birth_balance(0.0).unwrap();
        let periods: Vec<_> = MahadashaGenerator::new(0.0, &b).take(9).collect();
        let total = periods.last().unwrap().end_jd - periods[0].start_jd;
        assert!((total / DAYS_PER_YEAR - 120.0).abs() < 1e-9);
    }
}
