//! `dasha` command: Vimshottari mahadashas with the active chain.

use anyhow::{Context, Result};
use serde::Serialize;

use jyoti_rs::{
    BirthInput, CivilDate, DashaEntry, DashaLevel, DashaSnapshot, DashaTimeline, UtDateTime,
    dasha_timeline,
};
use jyoti_time::julian_day;

use crate::chart_cmd::birth_input;
use crate::cli::DashaArgs;
use crate::config::JyotiConfig;

#[derive(Serialize)]
struct DashaReport<'a> {
    timeline: &'a DashaTimeline,
    active_chain: DashaSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    antardashas: Option<Vec<DashaEntry>>,
}

pub fn run(args: DashaArgs, config: &JyotiConfig, json: bool) -> Result<()> {
    let birth = birth_input(&args.birth)?;
    let as_of_jd = match &args.as_of {
        Some(date) => as_of_jd(date, &birth)?,
        None => birth.julian_day(),
    };
    let chart_config = config.chart_with(&args.overrides);

    let mut timeline = dasha_timeline(&birth, &chart_config, &config.timeline, as_of_jd)
        .context("dasha timeline failed")?;
    let depth: DashaLevel = args.depth.into();
    let active_chain = timeline.snapshot(depth)?;
    let antardashas = if args.antardashas {
        timeline
            .active_mahadasha()
            .map(|m| timeline.antardashas_of(&m.period))
    } else {
        None
    };

    if json {
        return crate::print_json(&DashaReport {
            timeline: &timeline,
            active_chain,
            antardashas,
        });
    }

    println!(
        "Moon at birth: {:.4}° sidereal, nakshatra {}; balance {:.4} years of {}",
        timeline.moon_longitude,
        timeline.balance.nakshatra,
        timeline.balance.balance_years,
        timeline.balance.lord.name()
    );
    println!();
    println!("Mahadashas:");
    print_entries(timeline.mahadashas());

    if let Some(antars) = &antardashas {
        println!();
        println!("Antardashas of the active mahadasha:");
        print_entries(antars);
    }

    println!();
    println!("Active at {}:", UtDateTime::from_jd(as_of_jd));
    if active_chain.periods.is_empty() {
        println!("  (before birth)");
    }
    for p in &active_chain.periods {
        println!(
            "  {:<16} {:<8} {} → {}",
            p.level.name(),
            p.lord.name(),
            UtDateTime::from_jd(p.start_jd),
            UtDateTime::from_jd(p.end_jd)
        );
    }
    Ok(())
}

/// Midnight local time on `date`, at the birth's UTC offset.
fn as_of_jd(date: &str, birth: &BirthInput) -> Result<f64> {
    let date: CivilDate = date.parse().context("invalid --as-of date")?;
    let midnight = jyoti_rs::CivilTime::new(0, 0)?;
    Ok(julian_day(date, midnight, birth.utc_offset_hours()))
}

fn print_entries(entries: &[DashaEntry]) {
    for e in entries {
        println!(
            "{} {:<8} {} → {}  ({:.2} y)",
            if e.is_active { "*" } else { " " },
            e.period.lord.name(),
            UtDateTime::from_jd(e.period.start_jd),
            UtDateTime::from_jd(e.period.end_jd),
            e.period.duration_years()
        );
    }
}
