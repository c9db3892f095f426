use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use jyoti_rs::{AyanamshaSystem, DashaLevel, NodeMode, ObliquityMode};

/// Vedic birth charts and Vimshottari dasha.
#[derive(Parser)]
#[command(name = "jyoti", version, about = "Vedic birth-chart calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML file with [chart] and [timeline] settings.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a birth chart.
    Chart(ChartArgs),
    /// List the Vimshottari mahadashas for a birth.
    Dasha(DashaArgs),
    /// Julian Day of a local date and time.
    Jd(JdArgs),
    /// Rashi of a sidereal longitude.
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude.
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

/// Date, time and place of birth.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Local date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Local clock time, hh:mm.
    #[arg(long)]
    pub time: String,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// UTC offset in hours (e.g. 5.5, -4).
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub tz: f64,
}

/// Overrides for the `[chart]` config section.
#[derive(clap::Args)]
pub struct ChartOverrides {
    /// Sidereal reference system.
    #[arg(long)]
    pub ayanamsha: Option<AyanamshaArg>,

    /// Mean or true lunar node.
    #[arg(long)]
    pub node: Option<NodeArg>,

    /// Mean or true obliquity for the ascendant.
    #[arg(long)]
    pub obliquity: Option<ObliquityArg>,
}

#[derive(clap::Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    #[command(flatten)]
    pub overrides: ChartOverrides,
}

#[derive(clap::Args)]
pub struct DashaArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    #[command(flatten)]
    pub overrides: ChartOverrides,

    /// Evaluate "active" periods at this local date (YYYY-MM-DD, same
    /// offset as birth). Defaults to the birth instant.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the active chain down to this level.
    #[arg(long, value_enum, default_value_t = LevelArg::Antardasha)]
    pub depth: LevelArg,

    /// Also list the antardashas of the active mahadasha.
    #[arg(long)]
    pub antardashas: bool,
}

#[derive(clap::Args)]
pub struct JdArgs {
    /// Local date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Local clock time, hh:mm.
    #[arg(long, default_value = "12:00")]
    pub time: String,

    /// UTC offset in hours.
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub tz: f64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AyanamshaArg {
    Lahiri,
    TrueLahiri,
    Kp,
    Raman,
    FaganBradley,
    Yukteshwar,
}

impl From<AyanamshaArg> for AyanamshaSystem {
    fn from(arg: AyanamshaArg) -> Self {
        match arg {
            AyanamshaArg::Lahiri => Self::Lahiri,
            AyanamshaArg::TrueLahiri => Self::TrueLahiri,
            AyanamshaArg::Kp => Self::KP,
            AyanamshaArg::Raman => Self::Raman,
            AyanamshaArg::FaganBradley => Self::FaganBradley,
            AyanamshaArg::Yukteshwar => Self::Yukteshwar,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NodeArg {
    Mean,
    True,
}

impl From<NodeArg> for NodeMode {
    fn from(arg: NodeArg) -> Self {
        match arg {
            NodeArg::Mean => Self::Mean,
            NodeArg::True => Self::True,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ObliquityArg {
    Mean,
    True,
}

impl From<ObliquityArg> for ObliquityMode {
    fn from(arg: ObliquityArg) -> Self {
        match arg {
            ObliquityArg::Mean => Self::Mean,
            ObliquityArg::True => Self::True,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
    Sookshmadasha,
    Pranadasha,
}

impl From<LevelArg> for DashaLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Mahadasha => Self::Mahadasha,
            LevelArg::Antardasha => Self::Antardasha,
            LevelArg::Pratyantardasha => Self::Pratyantardasha,
            LevelArg::Sookshmadasha => Self::Sookshmadasha,
            LevelArg::Pranadasha => Self::Pranadasha,
        }
    }
}
