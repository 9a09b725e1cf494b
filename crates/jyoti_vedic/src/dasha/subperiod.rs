//! Proportional sub-period generation.
//!
//! A parent period of duration `D` ruled by lord `L` splits into 9 children
//! in cycle order starting at `L`. Child boundaries are placed from the
//! cumulative weight, `start + D * cum / 120`, so rounding does not
//! accumulate across siblings. The last child ends exactly at the parent end.

use tracing::trace;

use crate::error::VedicError;

use super::sequence::{SEQUENCE_LEN, TOTAL_YEARS, cycle_from};
use super::types::DashaPeriod;

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the 9 children of a period.
///
/// Children are a pure function of the parent's lord, bounds and level.
/// Fails with `InvalidInterval` if the parent has no positive finite
/// duration, and with `InvalidInput` if the child level is not
/// representable.
pub fn subdivide(parent: &DashaPeriod) -> Result<Vec<DashaPeriod>, VedicError> {
    let duration = parent.end_jd - parent.start_jd;
    if !(parent.start_jd.is_finite() && duration.is_finite() && duration > 0.0) {
        return Err(VedicError::InvalidInterval {
            start_jd: parent.start_jd,
            end_jd: parent.end_jd,
        });
    }
    let child_level = parent
        .level
        .checked_add(1)
        .ok_or(VedicError::InvalidInput("period level too deep to subdivide"))?;

    trace!(
        lord = parent.lord.name(),
        level = parent.level,
        start_jd = parent.start_jd,
        end_jd = parent.end_jd,
        "subdividing period"
    );

    let mut children = Vec::with_capacity(SEQUENCE_LEN);
    let mut cursor = parent.start_jd;
    let mut cumulative = 0.0;

    for (order_0, (lord, years)) in cycle_from(parent.lord).enumerate() {
        cumulative += years;
        let end = parent.start_jd + duration * cumulative / TOTAL_YEARS;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
            is_birth_balance: false,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    Ok(children)
}
