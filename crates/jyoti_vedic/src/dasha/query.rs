//! Point-in-time queries over a dasha timeline.
//!
//! Location drills down from the active mahadasha, subdividing only the
//! chain of active periods: O(depth * 9) instead of materializing 9^depth
//! periods.

use tracing::debug;

use crate::error::VedicError;

use super::subperiod::subdivide;
use super::types::{DEFAULT_MAX_DEPTH, DashaPeriod, DashaSnapshot, DashaTimeline};

/// Index of the period containing `jd` in a contiguous, sorted slice.
///
/// Periods are half-open `[start_jd, end_jd)`; a zero-length period is
/// never selected.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods
        .get(idx)
        .filter(|p| p.start_jd <= jd)
        .map(|_| idx)
}

/// Chain of active periods at `target_jd`, outermost first, `depth` long.
///
/// `depth` is 1 for the mahadasha alone, 2 adds the antardasha, and so on
/// up to the default maximum depth.
pub fn locate(
    timeline: &DashaTimeline,
    target_jd: f64,
    depth: u8,
) -> Result<Vec<DashaPeriod>, VedicError> {
    locate_bounded(timeline, target_jd, depth, DEFAULT_MAX_DEPTH)
}

/// Active periods at `query_jd` bundled with the query instant.
pub fn snapshot(
    timeline: &DashaTimeline,
    query_jd: f64,
    depth: u8,
) -> Result<DashaSnapshot, VedicError> {
    let periods = locate(timeline, query_jd, depth)?;
    Ok(DashaSnapshot { query_jd, periods })
}

pub(crate) fn locate_bounded(
    timeline: &DashaTimeline,
    target_jd: f64,
    depth: u8,
    max_depth: u8,
) -> Result<Vec<DashaPeriod>, VedicError> {
    if depth == 0 || depth > max_depth {
        return Err(VedicError::InvalidInput(
            "depth must be between 1 and the configured maximum",
        ));
    }
    if !target_jd.is_finite() {
        return Err(VedicError::InvalidInput("query JD must be finite"));
    }

    let top = timeline.periods();
    let idx = find_active_period(top, target_jd).ok_or(VedicError::OutOfRange {
        query_jd: target_jd,
        start_jd: timeline.start_jd(),
        end_jd: timeline.end_jd(),
    })?;

    let mut chain = Vec::with_capacity(depth as usize);
    let mut current = top[idx];
    chain.push(current);

    for _ in 1..depth {
        let children = subdivide(&current)?;
        let i = find_active_period(&children, target_jd).ok_or(VedicError::OutOfRange {
            query_jd: target_jd,
            start_jd: current.start_jd,
            end_jd: current.end_jd,
        })?;
        current = children[i];
        chain.push(current);
    }

    debug!(
        query_jd = target_jd,
        depth,
        lord = current.lord.name(),
        "located active dasha chain"
    );
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::timeline::build_timeline;
    use crate::graha::Graha;

    const J2000: f64 = 2_451_545.0;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            lord: Graha::Surya,
            start_jd: start,
            end_jd: end,
            level: 0,
            order: 1,
            is_birth_balance: false,
        }
    }

    #[test]
    fn find_active_half_open() {
        let ps = [period(0.0, 10.0), period(10.0, 20.0), period(20.0, 30.0)];
        assert_eq!(find_active_period(&ps, 0.0), Some(0));
        assert_eq!(find_active_period(&ps, 9.999), Some(0));
        assert_eq!(find_active_period(&ps, 10.0), Some(1));
        assert_eq!(find_active_period(&ps, 29.0), Some(2));
        assert_eq!(find_active_period(&ps, 30.0), None);
        assert_eq!(find_active_period(&ps, -0.1), None);
        assert_eq!(find_active_period(&[], 5.0), None);
    }

    #[test]
    fn find_active_skips_empty_period() {
        let ps = [period(0.0, 10.0), period(10.0, 10.0), period(10.0, 20.0)];
        assert_eq!(find_active_period(&ps, 10.0), Some(2));
    }

    #[test]
    fn locate_at_birth_is_balance_chain() {
        let tl = build_timeline(100.0, J2000, 120.0).unwrap();
        let chain = locate(&tl, J2000, 3).unwrap();
        assert_eq!(chain.len(), 3);
        assert!(chain[0].is_birth_balance);
        // all three start at birth and share the lord
        for p in &chain {
            assert_eq!(p.start_jd, J2000);
            assert_eq!(p.lord, chain[0].lord);
        }
    }

    #[test]
    fn locate_nesting() {
        let tl = build_timeline(200.0, J2000, 120.0).unwrap();
        let t = J2000 + 12_345.6;
        let chain = locate(&tl, t, 5).unwrap();
        assert_eq!(chain.len(), 5);
        for (lvl, p) in chain.iter().enumerate() {
            assert_eq!(p.level as usize, lvl);
            assert!(p.contains(t));
        }
        for w in chain.windows(2) {
            assert!(w[1].start_jd >= w[0].start_jd && w[1].end_jd <= w[0].end_jd);
        }
    }

    #[test]
    fn locate_out_of_range() {
        let tl = build_timeline(0.0, J2000, 120.0).unwrap();
        assert!(matches!(
            locate(&tl, J2000 - 1.0, 1),
            Err(VedicError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(&tl, tl.end_jd(), 1),
            Err(VedicError::OutOfRange { .. })
        ));
    }

    #[test]
    fn locate_bad_depth_or_target() {
        let tl = build_timeline(0.0, J2000, 120.0).unwrap();
        assert!(matches!(
            locate(&tl, J2000, 0),
            Err(VedicError::InvalidInput(_))
        ));
        assert!(matches!(
            locate(&tl, J2000, DEFAULT_MAX_DEPTH + 1),
            Err(VedicError::InvalidInput(_))
        ));
        assert!(matches!(
            locate(&tl, f64::NAN, 1),
            Err(VedicError::InvalidInput(_))
        ));
    }

    #[test]
    fn snapshot_carries_query() {
        let tl = build_timeline(0.0, J2000, 120.0).unwrap();
        let snap = snapshot(&tl, J2000 + 5000.0, 2).unwrap();
        assert_eq!(snap.query_jd, J2000 + 5000.0);
        assert_eq!(snap.periods.len(), 2);
        // 5000 days is past Ketu's 7y (2556.75 days): inside Shukra
        assert_eq!(snap.periods[0].lord, Graha::Shukra);
    }
}
