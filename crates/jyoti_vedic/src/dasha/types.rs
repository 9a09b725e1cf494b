//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! A dasha timeline is a contiguous run of top-level periods (mahadashas)
//! beginning at birth. Every period subdivides into 9 children, recursively,
//! giving the antardasha, pratyantardasha and deeper levels on demand.

use crate::graha::Graha;

use super::balance::DashaBalance;

/// Year length constant for dasha period calculations (Julian year).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Default maximum depth for location queries (Mahadasha .. Pranadasha).
pub const DEFAULT_MAX_DEPTH: u8 = 5;

/// Default horizon in years covered by a timeline (one full cycle).
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Hard cap on periods per level to prevent combinatorial explosion.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Convert a span in years to days.
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Convert a span in days to years.
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// The 5 named dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper named level, if any.
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

/// A single dasha period over the half-open interval `[start_jd, end_jd)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Depth in the hierarchy, 0 = mahadasha. Unbounded past the named levels.
    pub level: u8,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// True only for the truncated first mahadasha.
    pub is_birth_balance: bool,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in years.
    pub fn duration_years(&self) -> f64 {
        days_to_years(self.duration_days())
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Named level, for the first 5 depths.
    pub fn dasha_level(&self) -> Option<DashaLevel> {
        DashaLevel::from_u8(self.level)
    }
}

/// Immutable sequence of top-level periods starting at birth.
///
/// Constructed only by the timeline builder. Periods are contiguous, the
/// first begins exactly at `birth_jd` and is the only one flagged as birth
/// balance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DashaTimeline {
    pub(crate) birth_jd: f64,
    pub(crate) moon_sidereal_lon: f64,
    pub(crate) horizon_years: f64,
    pub(crate) balance: DashaBalance,
    pub(crate) periods: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// Top-level periods in chronological order.
    pub fn periods(&self) -> &[DashaPeriod] {
        &self.periods
    }

    /// Birth JD UTC.
    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    /// Moon sidereal longitude the timeline was built from.
    pub fn moon_sidereal_lon(&self) -> f64 {
        self.moon_sidereal_lon
    }

    /// Requested coverage in years.
    pub fn horizon_years(&self) -> f64 {
        self.horizon_years
    }

    /// Birth balance of the first period.
    pub fn balance(&self) -> &DashaBalance {
        &self.balance
    }

    /// Start of the covered span (the birth instant).
    pub fn start_jd(&self) -> f64 {
        self.birth_jd
    }

    /// End of the covered span (exclusive).
    pub fn end_jd(&self) -> f64 {
        self.periods.last().map_or(self.birth_jd, |p| p.end_jd)
    }

    /// Number of top-level periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false for a timeline produced by the builder.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// Active periods at a specific date (one per requested level).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashaSnapshot {
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Active periods: periods[0]=active mahadasha, [1]=active antardasha, etc.
    pub periods: Vec<DashaPeriod>,
}
