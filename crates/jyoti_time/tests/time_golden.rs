//! Golden values for the civil-time → Julian Day → sidereal-time chain.

use approx::assert_abs_diff_eq;
use jyoti_time::{
    CivilDate, CivilTime, TimeError, UtDateTime, gmst_deg, julian_day, local_sidereal_time_deg,
    mean_obliquity_deg, true_obliquity_deg, validate_utc_offset,
};

// ---------------------------------------------------------------------------
// Julian Day
// ---------------------------------------------------------------------------

#[test]
fn reference_epoch() {
    let jd = julian_day(
        CivilDate::new(2000, 1, 1).unwrap(),
        CivilTime::new(12, 0).unwrap(),
        0.0,
    );
    assert_eq!(jd, 2_451_545.0);
}

#[test]
fn negative_offset_crosses_midnight() {
    // 1990-01-15 22:00 at UTC-5 is 1990-01-16 03:00 UT
    let jd = julian_day(
        CivilDate::new(1990, 1, 15).unwrap(),
        CivilTime::new(22, 0).unwrap(),
        -5.0,
    );
    let ut = UtDateTime::from_jd(jd);
    assert_eq!((ut.year, ut.month, ut.day, ut.hour, ut.minute), (1990, 1, 16, 3, 0));
}

#[test]
fn positive_offset_crosses_midnight_backwards() {
    // 2024-03-01 02:30 at UTC+5:30 is 2024-02-29 21:00 UT
    let jd = julian_day(
        CivilDate::new(2024, 3, 1).unwrap(),
        CivilTime::new(2, 30).unwrap(),
        5.5,
    );
    let ut = UtDateTime::from_jd(jd);
    assert_eq!(ut.to_string(), "2024-02-29 21:00 UT");
}

#[test]
fn one_minute_steps_are_monotonic() {
    let date = CivilDate::new(1985, 6, 30).unwrap();
    let mut prev = f64::NEG_INFINITY;
    for m in 0..60 {
        let jd = julian_day(date, CivilTime::new(23, m).unwrap(), 0.0);
        assert!(jd > prev);
        prev = jd;
    }
}

#[test]
fn validation_names_fields() {
    let e = CivilDate::new(2023, 2, 29).unwrap_err();
    assert_eq!(e.field(), "day");
    let e = CivilTime::new(25, 0).unwrap_err();
    assert_eq!(e.field(), "hour");
    let e = validate_utc_offset(15.0).unwrap_err();
    assert_eq!(e, TimeError::InvalidUtcOffset { hours: 15.0 });
    assert_eq!(e.field(), "utc_offset_hours");
}

// ---------------------------------------------------------------------------
// Sidereal time and obliquity
// ---------------------------------------------------------------------------

#[test]
fn sidereal_day_is_shorter_than_solar_day() {
    // GMST gains ≈ 0.9856° per solar day
    let g0 = gmst_deg(2_451_545.0);
    let g1 = gmst_deg(2_451_546.0);
    let gain = (g1 - g0).rem_euclid(360.0);
    assert_abs_diff_eq!(gain, 0.985_647, epsilon = 1e-4);
}

#[test]
fn lst_greenwich_vs_east() {
    let jd = 2_447_000.25;
    let lst0 = local_sidereal_time_deg(jd, 0.0);
    let lst_e = local_sidereal_time_deg(jd, 77.2);
    assert_abs_diff_eq!((lst_e - lst0).rem_euclid(360.0), 77.2, epsilon = 1e-9);
}

#[test]
fn obliquity_is_near_23_4() {
    for &t in &[-1.0, 0.0, 0.5] {
        let m = mean_obliquity_deg(t);
        let tr = true_obliquity_deg(t);
        assert!((23.4..23.5).contains(&m), "mean = {m}");
        assert!((tr - m).abs() < 0.003);
    }
}
