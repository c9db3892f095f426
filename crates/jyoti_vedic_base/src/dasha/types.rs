//! Core types for Vimshottari dasha periods.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used for every dasha duration.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The five hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period, half-open `[start_jd, end_jd)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD (UT), inclusive.
    pub start_jd: f64,
    /// JD (UT), exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings (or since birth, for mahadashas).
    pub order: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasha years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls inside `[start_jd, end_jd)`.
    pub fn is_active_at(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// The chain of active periods at one instant, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    /// `periods[0]` is the mahadasha, `periods[1]` the antardasha, and so on.
    pub periods: Vec<DashaPeriod>,
}

/// Index of the period containing `jd` in a sorted, contiguous slice.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.is_active_at(jd)).map(|_| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            lord: Graha::Ketu,
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: 1,
        }
    }

    #[test]
    fn level_chain_ends_at_prana() {
        let mut level = DashaLevel::Mahadasha;
        let mut depth = 0;
        while let Some(next) = level.child_level() {
            level = next;
            depth += 1;
        }
        assert_eq!(level, DashaLevel::Pranadasha);
        assert_eq!(depth, 4);
    }

    #[test]
    fn half_open_interval() {
        let p = period(10.0, 20.0);
        assert!(p.is_active_at(10.0));
        assert!(p.is_active_at(19.999));
        assert!(!p.is_active_at(20.0));
        assert!(!p.is_active_at(9.999));
    }

    #[test]
    fn find_active_in_contiguous_run() {
        let ps = [period(0.0, 5.0), period(5.0, 9.0), period(9.0, 30.0)];
        assert_eq!(find_active_period(&ps, 0.0), Some(0));
        assert_eq!(find_active_period(&ps, 5.0), Some(1));
        assert_eq!(find_active_period(&ps, 29.9), Some(2));
        assert_eq!(find_active_period(&ps, 30.0), None);
        assert_eq!(find_active_period(&ps, -1.0), None);
    }

    #[test]
    fn duration_years_uses_julian_year() {
        let p = period(0.0, 7.0 * DAYS_PER_YEAR);
        assert!((p.duration_years() - 7.0).abs() < 1e-12);
    }
}
