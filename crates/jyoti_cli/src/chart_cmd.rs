//! `chart` command: ascendant, MC and the nine grahas.

use anyhow::{Context, Result};
use tracing::info;

use jyoti_rs::{BirthInput, ChartResult, UtDateTime, ZodiacPoint, compute_chart};

use crate::cli::{BirthArgs, ChartArgs};
use crate::config::JyotiConfig;

pub fn run(args: ChartArgs, config: &JyotiConfig, json: bool) -> Result<()> {
    let birth = birth_input(&args.birth)?;
    let chart_config = config.chart_with(&args.overrides);
    info!(?chart_config, "computing chart");
    let chart = compute_chart(&birth, &chart_config).context("chart computation failed")?;

    if json {
        return crate::print_json(&chart);
    }
    print_chart(&birth, &chart);
    Ok(())
}

/// Validate birth flags through the facade.
pub fn birth_input(args: &BirthArgs) -> Result<BirthInput> {
    BirthInput::parse(&args.date, &args.time, args.lat, args.lon, args.tz)
        .context("invalid birth data")
}

fn point_line(p: &ZodiacPoint) -> String {
    format!(
        "{:<10} {}  {:<17} pada {}",
        p.rashi.name(),
        p.dms,
        p.nakshatra.name(),
        p.pada
    )
}

fn print_chart(birth: &BirthInput, chart: &ChartResult) {
    println!(
        "Birth:     {} {} (UTC{:+}) = {} (JD {:.6})",
        birth.date(),
        birth.time(),
        birth.utc_offset_hours(),
        UtDateTime::from_jd(chart.julian_day),
        chart.julian_day
    );
    println!(
        "Ayanamsha: {} {:.4}°",
        chart.ayanamsha_system.name(),
        chart.ayanamsha_deg
    );
    println!("Lagna:     {}", point_line(&chart.ascendant));
    println!("MC:        {}", point_line(&chart.mc));
    println!();
    println!(
        "{:<8} {:<10} {:<11} {:<17} {:>4} {:>5} {:>9}  {:<11} R",
        "Graha", "Rashi", "Degree", "Nakshatra", "Pada", "House", "Speed", "Dignity"
    );
    for pos in chart.planets.values() {
        println!(
            "{:<8} {:<10} {:<11} {:<17} {:>4} {:>5} {:>9.4}  {:<11} {}",
            pos.graha.name(),
            pos.point.rashi.name(),
            pos.point.dms.to_string(),
            pos.point.nakshatra.name(),
            pos.point.pada,
            pos.house,
            pos.speed_deg_per_day,
            pos.dignity.name(),
            if pos.is_retrograde { "R" } else { "" }
        );
    }
}
