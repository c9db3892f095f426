//! Proportional sub-period generation.
//!
//! A parent of length Y ruled by lord M splits into nine children in
//! dasha order starting at M, each lasting `Y × years(child) / 120`.

use super::types::DashaPeriod;
use super::vimshottari::{
    VIMSHOTTARI_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, sequence_position, vimshottari_years,
};

/// Snap the last child's end to the parent's end to absorb floating-point
/// drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// All nine children of a period. Empty below the deepest level.
pub fn sub_periods(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_days = parent.duration_days();
    let first = sequence_position(parent.lord);

    let mut children = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cursor = parent.start_jd;
    for i in 0..VIMSHOTTARI_SEQUENCE.len() {
        let lord = VIMSHOTTARI_SEQUENCE[(first + i) % VIMSHOTTARI_SEQUENCE.len()].0;
        let end = cursor + parent_days * vimshottari_years(lord) / VIMSHOTTARI_CYCLE_YEARS;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: i as u32 + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DAYS_PER_YEAR, DashaLevel};
    use crate::graha::Graha;

    fn maha(lord: Graha, start: f64) -> DashaPeriod {
        DashaPeriod {
            lord,
            start_jd: start,
            end_jd: start + vimshottari_years(lord) * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
        }
    }

    #[test]
    fn starts_with_parent_lord() {
        let children = sub_periods(&maha(Graha::Guru, 2_451_545.0));
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].lord, Graha::Guru);
        assert_eq!(children[1].lord, Graha::Shani);
        assert_eq!(children[8].lord, Graha::Rahu);
    }

    #[test]
    fn durations_sum_to_parent() {
        let parent = maha(Graha::Shukra, 2_440_000.5);
        let children = sub_periods(&parent);
        let sum: f64 = children.iter().map(|c| c.duration_years()).sum();
        assert!((sum - parent.duration_years()).abs() < 1e-9);
        assert_eq!(children.last().unwrap().end_jd, parent.end_jd);
    }

    #[test]
    fn shukra_shukra_is_three_years_four_months() {
        // 20 × 20 / 120 = 3⅓ years
        let children = sub_periods(&maha(Graha::Shukra, 0.0));
        assert!((children[0].duration_years() - 20.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn children_are_contiguous() {
        let children = sub_periods(&maha(Graha::Rahu, 2_451_545.0));
        assert_eq!(children[0].start_jd, 2_451_545.0);
        for w in children.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }

    #[test]
    fn pranadasha_has_no_children() {
        let mut p = maha(Graha::Ketu, 0.0);
        p.level = DashaLevel::Pranadasha;
        assert!(sub_periods(&p).is_empty());
    }
}
