//! Subcommand handlers: parse inputs, call the engine, print text or JSON.

use anyhow::{Context, Result};
use jyoti_time::UtcTime;
use jyoti_vedic::{
    DashaBalance, DashaEngine, DashaLevel, DashaPeriod, DashaSnapshot, Dms, Element, Gana,
    Graha, Modality, NakshatraInfo, RashiInfo, abhijit_position, dasha_balance, deg_to_dms,
    nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{BirthArgs, CurrentArgs, DashaArgs};
use crate::config::CliConfig;

/// Settings shared by every handler.
pub struct AppContext {
    pub config: CliConfig,
    pub engine: DashaEngine,
    pub json: bool,
}

impl AppContext {
    pub fn new(config: CliConfig, json_flag: bool) -> Result<Self> {
        let engine = DashaEngine::new(config.dasha).context("invalid dasha configuration")?;
        let json = json_flag || config.output.json;
        Ok(Self {
            config,
            engine,
            json,
        })
    }
}

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RashiReport {
    #[serde(flatten)]
    info: RashiInfo,
    name: &'static str,
    western_name: &'static str,
    lord: Graha,
    element: Element,
    modality: Modality,
}

#[derive(Serialize)]
struct NakshatraReport {
    #[serde(flatten)]
    info: NakshatraInfo,
    name: &'static str,
    deity: &'static str,
    symbol: &'static str,
    gana: Gana,
    abhijit_degrees: Option<f64>,
}

#[derive(Serialize)]
struct PeriodReport {
    #[serde(flatten)]
    period: DashaPeriod,
    level_name: String,
    start_utc: String,
    end_utc: String,
}

impl PeriodReport {
    fn new(period: &DashaPeriod) -> Self {
        Self {
            period: *period,
            level_name: level_name(period.level),
            start_utc: UtcTime::from_jd_utc(period.start_jd).to_string(),
            end_utc: UtcTime::from_jd_utc(period.end_jd).to_string(),
        }
    }
}

#[derive(Serialize)]
struct TimelineReport {
    birth_jd: f64,
    moon_sidereal_lon: f64,
    horizon_years: f64,
    balance: DashaBalance,
    levels: Vec<Vec<PeriodReport>>,
}

#[derive(Serialize)]
struct SnapshotReport {
    query_jd: f64,
    query_utc: String,
    periods: Vec<PeriodReport>,
}

impl SnapshotReport {
    fn new(snapshot: &DashaSnapshot) -> Self {
        Self {
            query_jd: snapshot.query_jd,
            query_utc: UtcTime::from_jd_utc(snapshot.query_jd).to_string(),
            periods: snapshot.periods.iter().map(PeriodReport::new).collect(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn level_name(level: u8) -> String {
    DashaLevel::from_u8(level)
        .map(|l| l.name().to_string())
        .unwrap_or_else(|| format!("Level {level}"))
}

fn format_dms(dms: &Dms) -> String {
    format!("{} deg {} min {:.1} sec", dms.degrees, dms.minutes, dms.seconds)
}

// ── Input parsing ────────────────────────────────────────────────────

fn parse_utc(flag: &str, value: &str) -> Result<UtcTime> {
    value
        .parse::<UtcTime>()
        .with_context(|| format!("invalid {flag} instant: {value}"))
}

fn sidereal(lon: f64) -> f64 {
    let normalized = normalize_360(lon);
    if normalized != lon {
        debug!(input = lon, normalized, "normalized longitude");
    }
    normalized
}

fn birth_jd(args: &BirthArgs) -> Result<f64> {
    let birth = parse_utc("--birth", &args.birth)?;
    Ok(birth.to_jd_utc()?)
}

// ── Classification ───────────────────────────────────────────────────

pub fn rashi(ctx: &AppContext, lon: f64) -> Result<()> {
    let info = rashi_from_longitude(sidereal(lon))?;
    let r = info.rashi;
    if ctx.json {
        return print_json(&RashiReport {
            info,
            name: r.name(),
            western_name: r.western_name(),
            lord: r.lord(),
            element: r.element(),
            modality: r.modality(),
        });
    }
    println!(
        "{} ({}) - {} ({:.4} deg in rashi)",
        r.name(),
        r.western_name(),
        format_dms(&info.dms),
        info.degrees_in_rashi
    );
    println!(
        "  Lord: {}  Element: {}  Modality: {}  Opposite: {}",
        r.lord().name(),
        r.element().name(),
        r.modality().name(),
        r.opposite().name()
    );
    Ok(())
}

pub fn nakshatra(ctx: &AppContext, lon: f64) -> Result<()> {
    let lon = sidereal(lon);
    let info = nakshatra_from_longitude(lon)?;
    let n = info.nakshatra;
    let abhijit = abhijit_position(lon);
    if ctx.json {
        return print_json(&NakshatraReport {
            info,
            name: n.name(),
            deity: n.deity(),
            symbol: n.symbol(),
            gana: n.gana(),
            abhijit_degrees: abhijit,
        });
    }
    println!(
        "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
        n.name(),
        info.nakshatra_index,
        info.pada,
        info.degrees_in_nakshatra,
        info.degrees_in_pada
    );
    println!(
        "  Lord: {}  Deity: {}  Symbol: {}  Gana: {}",
        info.lord.name(),
        n.deity(),
        n.symbol(),
        n.gana().name()
    );
    if let Some(d) = abhijit {
        println!("  Abhijit: {d:.4} deg into Abhijit");
    }
    Ok(())
}

pub fn dms(ctx: &AppContext, deg: f64) -> Result<()> {
    let d = deg_to_dms(deg);
    if ctx.json {
        return print_json(&d);
    }
    let sign = if deg < 0.0 { "-" } else { "" };
    println!("{sign}{}", format_dms(&d));
    Ok(())
}

// ── Dasha ────────────────────────────────────────────────────────────

pub fn balance(ctx: &AppContext, args: &BirthArgs) -> Result<()> {
    let jd = birth_jd(args)?;
    let b = dasha_balance(sidereal(args.moon), jd)?;
    if ctx.json {
        return print_json(&b);
    }
    println!(
        "{} mahadasha: {:.4} of {} years remaining ({:.1} days, {:.2}% elapsed)",
        b.lord.name(),
        b.remaining_years,
        b.total_years,
        b.remaining_days,
        b.elapsed_fraction * 100.0
    );
    println!("  Ends: {} (JD {:.4})", UtcTime::from_jd_utc(b.end_jd), b.end_jd);
    Ok(())
}

pub fn dasha(ctx: &AppContext, args: &DashaArgs) -> Result<()> {
    let jd = birth_jd(&args.birth)?;
    let timeline = ctx
        .engine
        .build_timeline(sidereal(args.birth.moon), jd, args.horizon)?;
    let depth = args.levels.unwrap_or(ctx.config.output.levels);
    let levels = ctx.engine.expand_levels(&timeline, depth)?;
    info!(
        periods = timeline.len(),
        levels = levels.len(),
        "computed dasha timeline"
    );

    if ctx.json {
        return print_json(&TimelineReport {
            birth_jd: timeline.birth_jd(),
            moon_sidereal_lon: timeline.moon_sidereal_lon(),
            horizon_years: timeline.horizon_years(),
            balance: *timeline.balance(),
            levels: levels
                .iter()
                .map(|lvl| lvl.iter().map(PeriodReport::new).collect())
                .collect(),
        });
    }

    println!(
        "Vimshottari Dasha for birth {} ({} levels, {} years)\n",
        args.birth.birth,
        levels.len(),
        timeline.horizon_years()
    );
    let max_rows = ctx.config.output.max_rows;
    for (lvl_idx, level) in levels.iter().enumerate() {
        println!(
            "Level {} ({}) - {} periods:",
            lvl_idx,
            level_name(lvl_idx as u8),
            level.len()
        );
        let display_count = level.len().min(max_rows);
        for period in &level[..display_count] {
            let indent = "  ".repeat(lvl_idx + 1);
            let marker = if period.is_birth_balance { " *" } else { "" };
            println!(
                "{}[{}] {} {} - {} (JD {:.4} - {:.4}, {:.1} days){}",
                indent,
                period.order,
                period.lord.name(),
                UtcTime::from_jd_utc(period.start_jd),
                UtcTime::from_jd_utc(period.end_jd),
                period.start_jd,
                period.end_jd,
                period.duration_days(),
                marker,
            );
        }
        if level.len() > display_count {
            println!("  ... and {} more periods", level.len() - display_count);
        }
        println!();
    }
    Ok(())
}

pub fn current(ctx: &AppContext, args: &CurrentArgs) -> Result<()> {
    let jd = birth_jd(&args.birth)?;
    let at = parse_utc("--at", &args.at)?;
    let at_jd = at.to_jd_utc()?;

    // Cover the query instant even past the configured horizon.
    let needed_years = (at_jd - jd) / jyoti_vedic::DAYS_PER_YEAR + 1.0;
    let horizon = needed_years.max(ctx.config.dasha.default_horizon_years);
    let timeline = ctx
        .engine
        .build_timeline(sidereal(args.birth.moon), jd, Some(horizon))?;
    let depth = args.depth.unwrap_or(ctx.config.dasha.max_depth);
    let snapshot = ctx.engine.snapshot(&timeline, at_jd, depth)?;

    if ctx.json {
        return print_json(&SnapshotReport::new(&snapshot));
    }
    println!("Dasha Snapshot at {} for birth {}\n", at, args.birth.birth);
    for period in &snapshot.periods {
        let indent = "  ".repeat(period.level as usize);
        println!(
            "{}{}: {} (JD {:.4} - {:.4}, {:.1} days)",
            indent,
            level_name(period.level),
            period.lord.name(),
            period.start_jd,
            period.end_jd,
            period.duration_days(),
        );
    }
    Ok(())
}
