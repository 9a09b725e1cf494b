use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vimshottari dasha and sidereal sign/mansion lookup.
#[derive(Parser)]
#[command(
    name = "jyoti",
    version,
    about = "Vimshottari dasha periods and sidereal rashi/nakshatra lookup"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./jyoti.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Remaining first mahadasha at birth
    Balance(BirthArgs),
    /// Mahadasha timeline, optionally expanded to sub-periods
    Dasha(DashaArgs),
    /// Periods active at a given instant
    Current(CurrentArgs),
}

/// Birth inputs shared by the dasha subcommands.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Sidereal Moon longitude at birth in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub moon: f64,

    /// Birth instant, UTC (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    pub birth: String,
}

/// Arguments for the `dasha` subcommand.
#[derive(clap::Args)]
pub struct DashaArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Years to cover (overrides config)
    #[arg(long)]
    pub horizon: Option<f64>,

    /// Sub-levels to expand below mahadasha (0 = mahadashas only)
    #[arg(long)]
    pub levels: Option<u8>,
}

/// Arguments for the `current` subcommand.
#[derive(clap::Args)]
pub struct CurrentArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Query instant, UTC (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    pub at: String,

    /// Levels to report, 1 = mahadasha only (default: config max_depth)
    #[arg(long)]
    pub depth: Option<u8>,
}
