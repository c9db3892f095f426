//! `jd`, `rashi` and `nakshatra` commands.

use anyhow::{Context, Result, ensure};
use serde::Serialize;

use jyoti_rs::{CivilDate, CivilTime, UtDateTime};
use jyoti_time::{centuries_since_j2000, julian_day, validate_utc_offset};
use jyoti_vedic_base::{
    nakshatra_from_longitude, nakshatra_lord, rashi_from_longitude, rashi_lord,
};

use crate::cli::JdArgs;

#[derive(Serialize)]
struct JdReport {
    julian_day: f64,
    centuries_since_j2000: f64,
    ut: String,
}

pub fn jd(args: JdArgs, json: bool) -> Result<()> {
    let date: CivilDate = args.date.parse().context("invalid --date")?;
    let time: CivilTime = args.time.parse().context("invalid --time")?;
    let offset = validate_utc_offset(args.tz).context("invalid --tz")?;
    let jd = julian_day(date, time, offset);
    let report = JdReport {
        julian_day: jd,
        centuries_since_j2000: centuries_since_j2000(jd),
        ut: UtDateTime::from_jd(jd).to_string(),
    };

    if json {
        return crate::print_json(&report);
    }
    println!(
        "JD {:.6}  ({})  T = {:.9}",
        report.julian_day, report.ut, report.centuries_since_j2000
    );
    Ok(())
}

pub fn rashi(lon: f64, json: bool) -> Result<()> {
    ensure!(lon.is_finite(), "longitude must be a finite number of degrees");
    let info = rashi_from_longitude(lon);
    if json {
        return crate::print_json(&info);
    }
    println!(
        "{} ({}) {}  lord {}",
        info.rashi.name(),
        info.rashi.western_name(),
        info.dms,
        rashi_lord(info.rashi).name()
    );
    Ok(())
}

pub fn nakshatra(lon: f64, json: bool) -> Result<()> {
    ensure!(lon.is_finite(), "longitude must be a finite number of degrees");
    let info = nakshatra_from_longitude(lon);
    if json {
        return crate::print_json(&info);
    }
    println!(
        "{} (#{}) pada {}  {:.4}° in nakshatra  dasha lord {}",
        info.nakshatra.name(),
        info.number,
        info.pada,
        info.degrees_in_nakshatra,
        nakshatra_lord(info.number)?.name()
    );
    Ok(())
}
