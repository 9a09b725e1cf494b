//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! The Moon's progress through its nakshatra is the fraction of the
//! nakshatra lord's mahadasha already elapsed before birth.

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::classify_longitude;

use super::sequence::{lord_years, starting_lord};
use super::types::years_to_days;

/// Remaining portion of the birth mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashaBalance {
    /// Lord of the Moon's nakshatra, ruling the first mahadasha.
    pub lord: Graha,
    /// 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra.
    pub nakshatra_index: u8,
    /// Full length of the lord's mahadasha in years.
    pub total_years: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    pub elapsed_years: f64,
    pub remaining_years: f64,
    pub remaining_days: f64,
    /// JD UTC at which the first mahadasha ends.
    pub end_jd: f64,
}

/// Compute the birth balance from the Moon's sidereal longitude.
///
/// Fails with `InvalidInput` for a longitude outside [0, 360) or a
/// non-finite birth instant.
pub fn dasha_balance(moon_sidereal_lon: f64, birth_jd: f64) -> Result<DashaBalance, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    let (nak_idx, elapsed_fraction) = classify_longitude(moon_sidereal_lon)?;
    let lord = starting_lord(nak_idx);
    let total_years = lord_years(lord);
    let remaining_years = total_years * (1.0 - elapsed_fraction);
    let remaining_days = years_to_days(remaining_years);

    Ok(DashaBalance {
        lord,
        nakshatra_index: nak_idx,
        total_years,
        elapsed_fraction,
        elapsed_years: total_years * elapsed_fraction,
        remaining_years,
        remaining_days,
        end_jd: birth_jd + remaining_days,
    })
}
