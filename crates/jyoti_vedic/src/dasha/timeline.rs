//! Mahadasha timeline construction and level expansion.

use jyoti_time::UtcTime;
use tracing::debug;

use crate::error::VedicError;

use super::balance::dasha_balance;
use super::sequence::{SEQUENCE_LEN, lord_years, next_lord};
use super::subperiod::subdivide;
use super::types::{DashaPeriod, DashaTimeline, MAX_PERIODS_PER_LEVEL, years_to_days};

/// Most top-level periods a timeline may hold (bounded by the `order` field).
pub const MAX_TIMELINE_PERIODS: usize = u16::MAX as usize;

/// Build the mahadasha timeline from the birth Moon and instant.
///
/// The first period is the remaining balance of the birth nakshatra lord's
/// mahadasha and is always emitted. Full-length periods of the following
/// lords are appended while the covered span is shorter than
/// `horizon_years`. The last period is never truncated to the horizon.
pub fn build_timeline(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    horizon_years: f64,
) -> Result<DashaTimeline, VedicError> {
    if !(horizon_years.is_finite() && horizon_years > 0.0) {
        return Err(VedicError::InvalidInput(
            "horizon must be a finite positive number of years",
        ));
    }
    let balance = dasha_balance(moon_sidereal_lon, birth_jd)?;
    let horizon_days = years_to_days(horizon_years);

    let mut periods = Vec::with_capacity(SEQUENCE_LEN + 1);
    periods.push(DashaPeriod {
        lord: balance.lord,
        start_jd: birth_jd,
        end_jd: balance.end_jd,
        level: 0,
        order: 1,
        is_birth_balance: true,
    });

    let mut lord = balance.lord;
    let mut cursor = balance.end_jd;
    while cursor - birth_jd < horizon_days {
        if periods.len() >= MAX_TIMELINE_PERIODS {
            return Err(VedicError::InvalidInput(
                "horizon would exceed MAX_TIMELINE_PERIODS",
            ));
        }
        lord = next_lord(lord);
        let end = cursor + years_to_days(lord_years(lord));
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: 0,
            order: (periods.len() as u16) + 1,
            is_birth_balance: false,
        });
        cursor = end;
    }

    debug!(
        nakshatra = balance.nakshatra_index,
        lord = balance.lord.name(),
        remaining_years = balance.remaining_years,
        periods = periods.len(),
        "built dasha timeline"
    );

    Ok(DashaTimeline {
        birth_jd,
        moon_sidereal_lon,
        horizon_years,
        balance,
        periods,
    })
}

/// Build the timeline from a civil UTC birth instant.
pub fn build_timeline_utc(
    moon_sidereal_lon: f64,
    birth: &UtcTime,
    horizon_years: f64,
) -> Result<DashaTimeline, VedicError> {
    let birth_jd = birth.to_jd_utc()?;
    build_timeline(moon_sidereal_lon, birth_jd, horizon_years)
}

/// Subdivide every period of one level into the next level.
///
/// Zero-length parents (a birth balance that rounds to nothing, or their
/// descendants) contain no instant and contribute no children.
pub fn complete_level(parent_level: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * SEQUENCE_LEN;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::InvalidInput(
            "dasha level would exceed MAX_PERIODS_PER_LEVEL",
        ));
    }

    let mut result = Vec::with_capacity(estimated);
    for parent in parent_level {
        if parent.end_jd == parent.start_jd {
            continue;
        }
        result.extend(subdivide(parent)?);
    }
    Ok(result)
}

/// Materialize levels 0 through `max_level` of the timeline.
///
/// `levels[0]` is the timeline itself, `levels[1]` all antardashas, etc.
pub fn expand_levels(
    timeline: &DashaTimeline,
    max_level: u8,
) -> Result<Vec<Vec<DashaPeriod>>, VedicError> {
    let mut levels: Vec<Vec<DashaPeriod>> = Vec::with_capacity(max_level as usize + 1);
    levels.push(timeline.periods().to_vec());

    for _ in 0..max_level {
        let next = match levels.last() {
            Some(parent) => complete_level(parent)?,
            None => break,
        };
        levels.push(next);
    }

    debug!(
        levels = levels.len(),
        deepest = levels.last().map_or(0, Vec::len),
        "expanded dasha levels"
    );
    Ok(levels)
}
